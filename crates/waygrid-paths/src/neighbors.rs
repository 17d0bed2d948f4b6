use waygrid_core::Point;

/// The eight expansion offsets, in the order successors are generated:
/// the four axis moves (right, down, left, up) then the four diagonals.
///
/// The order only matters among equal priorities, where it fixes which of
/// several equally good cells is expanded first.
pub const OFFSETS_8: [Point; 8] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(1, -1),
    Point::new(-1, -1),
];
