use waypoint_core::GridLocation;

/// Manhattan (L1) distance between two locations.
#[inline]
pub fn manhattan(a: GridLocation, b: GridLocation) -> i32 {
    (a.row - b.row).abs() + (a.column - b.column).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = GridLocation::new(1, 7);
        let b = GridLocation::new(4, 2);
        assert_eq!(manhattan(a, b), 8);
        assert_eq!(manhattan(b, a), 8);
        assert_eq!(manhattan(a, a), 0);
    }
}
