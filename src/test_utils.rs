//! Helper utilities for tests.

/// Build a [`Grid`](crate::Grid) from nested arrays of string literals.
///
/// ```
/// let grid = tablepaste::grid![["a", "b"], ["c", "d"]];
/// assert_eq!(grid[1][0], "c");
/// ```
#[macro_export]
macro_rules! grid {
    ( $( [ $($cell:expr),* $(,)? ] ),* $(,)? ) => {
        vec![ $( vec![ $( ::std::string::ToString::to_string(&$cell) ),* ] ),* ]
    };
}
