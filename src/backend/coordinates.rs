use log::warn;

use super::mathphysics::Point2D;


// Index of the first element equal to `coordinates`.
fn first_index_of(
    coordinates: &Point2D,
    coordinate_list: &[Point2D]
) -> Option<usize> {
    coordinate_list
        .iter()
        .position(|item| item == coordinates)
}

/// Keeps the first occurrence of every coordinate value, preserving order:
/// `[A, B, C, A, D, C]` becomes `[A, B, C, D]`.
#[must_use]
pub fn unique_coordinates(coordinate_list: &[Point2D]) -> Vec<Point2D> {
    coordinate_list
        .iter()
        .enumerate()
        .filter(|(index, coordinates)| {
            first_index_of(coordinates, coordinate_list) == Some(*index)
        })
        .map(|(_, coordinates)| *coordinates)
        .collect()
}

/// Keeps every element whose value already appeared at an earlier index:
/// `[A, B, C, A, D, C]` becomes `[A, C]`.
#[must_use]
pub fn duplicate_coordinates(coordinate_list: &[Point2D]) -> Vec<Point2D> {
    coordinate_list
        .iter()
        .enumerate()
        .filter(|(index, coordinates)| {
            first_index_of(coordinates, coordinate_list) != Some(*index)
        })
        .map(|(_, coordinates)| *coordinates)
        .collect()
}

/// Coordinates that satisfy all filtering protocols at once.
///
/// A single list qualifies as a whole. With two or more lists only the
/// first two are intersected: each one is deduplicated, the results are
/// concatenated and the values repeated across them are kept.
#[must_use]
pub fn common_coordinates(filtered_lists: &[Vec<Point2D>]) -> Vec<Point2D> {
    match filtered_lists {
        []                         => Vec::new(),
        [single]                   => single.clone(),
        [first, second, rest @ ..] => {
            if !rest.is_empty() {
                warn!(
                    "Only the first two filtering protocols are combined, \
                    {} ignored",
                    rest.len()
                );
            }

            let mut combined = unique_coordinates(first);
            combined.extend(unique_coordinates(second));

            duplicate_coordinates(&combined)
        }
    }
}
