pub(crate) mod loading;
pub(crate) mod post_grid;

pub use loading::Loading;
pub use post_grid::PostGrid;
