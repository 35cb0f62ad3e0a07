//! Closed label sets for the categorical columns
//!
//! Each categorical column of the synthetic table draws from a small, fixed
//! set of labels. Using enums instead of strings makes an out-of-set label
//! unrepresentable.

use std::fmt;

// =================================================================================================
// Category
// =================================================================================================

/// Discrete, unordered category (column `categoria`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    A,
    B,
    C,
    D,
}

impl Category {
    /// All categories in declaration (and sort) order
    pub const ALL: [Category; 4] = [Category::A, Category::B, Category::C, Category::D];

    pub fn label(self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
            Category::D => "D",
        }
    }

    /// Integer code used to drive the scatter colormap (A → 0 ... D → 3)
    pub fn code(self) -> usize {
        self as usize
    }
}

// =================================================================================================
// Segment
// =================================================================================================

/// Market segment (column `segmento`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    Alto,
    Medio,
    Bajo,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Alto, Segment::Medio, Segment::Bajo];

    pub fn label(self) -> &'static str {
        match self {
            Segment::Alto => "Alto",
            Segment::Medio => "Medio",
            Segment::Bajo => "Bajo",
        }
    }
}

// =================================================================================================
// Region
// =================================================================================================

/// Geographic region (column `region`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Norte,
    Sur,
    Este,
    Oeste,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Norte, Region::Sur, Region::Este, Region::Oeste];

    pub fn label(self) -> &'static str {
        match self {
            Region::Norte => "Norte",
            Region::Sur => "Sur",
            Region::Este => "Este",
            Region::Oeste => "Oeste",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes_follow_declaration_order() {
        let codes: Vec<usize> = Category::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>6}", Region::Sur), "   Sur");
        assert_eq!(format!("{:<6}|", Segment::Bajo), "Bajo  |");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::C.label(), "C");
        assert_eq!(Segment::Medio.label(), "Medio");
        assert_eq!(Region::Oeste.to_string(), "Oeste");
    }
}
