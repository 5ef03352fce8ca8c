// RTT logging when the `rtt` feature is on, nothing otherwise.
#[cfg(feature = "rtt")]
macro_rules! trace {
    ($($arg:tt)*) => {
        rtt_target::rprintln!($($arg)*)
    };
}

#[cfg(not(feature = "rtt"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
