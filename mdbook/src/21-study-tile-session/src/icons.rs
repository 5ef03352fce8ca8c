use crate::config::GRID_SIZE;

/// 5x5 brightness pattern, indexed `[row][column]`.
pub type Pattern = [[u8; GRID_SIZE]; GRID_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    SmallDiamond,
    Diamond,
    Square,
    /// Cross shown while the noise hold is active.
    No,
    /// Checkmark at the end of a block.
    Yes,
    Pause,
}

impl Icon {
    pub fn pattern(self) -> Pattern {
        match self {
            Icon::SmallDiamond => [
                [0, 0, 0, 0, 0],
                [0, 0, 1, 0, 0],
                [0, 1, 0, 1, 0],
                [0, 0, 1, 0, 0],
                [0, 0, 0, 0, 0],
            ],
            Icon::Diamond => [
                [0, 0, 1, 0, 0],
                [0, 1, 0, 1, 0],
                [1, 0, 0, 0, 1],
                [0, 1, 0, 1, 0],
                [0, 0, 1, 0, 0],
            ],
            Icon::Square => [
                [1, 1, 1, 1, 1],
                [1, 0, 0, 0, 1],
                [1, 0, 0, 0, 1],
                [1, 0, 0, 0, 1],
                [1, 1, 1, 1, 1],
            ],
            Icon::No => [
                [1, 0, 0, 0, 1],
                [0, 1, 0, 1, 0],
                [0, 0, 1, 0, 0],
                [0, 1, 0, 1, 0],
                [1, 0, 0, 0, 1],
            ],
            Icon::Yes => [
                [0, 0, 0, 0, 0],
                [0, 0, 0, 0, 1],
                [0, 0, 0, 1, 0],
                [1, 0, 1, 0, 0],
                [0, 1, 0, 0, 0],
            ],
            Icon::Pause => [
                [0, 1, 0, 1, 0],
                [0, 1, 0, 1, 0],
                [0, 1, 0, 1, 0],
                [0, 1, 0, 1, 0],
                [0, 1, 0, 1, 0],
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(icon: Icon) -> usize {
        icon.pattern().iter().flatten().filter(|&&b| b > 0).count()
    }

    #[test]
    fn pause_is_two_full_bars() {
        let pattern = Icon::Pause.pattern();
        for row in pattern {
            assert_eq!(row, [0, 1, 0, 1, 0]);
        }
    }

    #[test]
    fn animation_frames_grow() {
        assert!(lit(Icon::SmallDiamond) < lit(Icon::Diamond));
        assert!(lit(Icon::Diamond) < lit(Icon::Square));
    }

    #[test]
    fn cross_is_symmetric() {
        let p = Icon::No.pattern();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                assert_eq!(p[y][x], p[x][y]);
            }
        }
    }
}
