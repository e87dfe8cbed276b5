pub mod config;
pub mod items;
pub mod scale;
pub mod store;
pub mod types;
pub mod year_scale;

pub use config::TimelineConfig;
pub use items::{
    ArtistSpanItem, EventItem, ImageRef, ItemColor, ItemId, ItemKind, ItemRef, PeriodItem,
    TimelineItem,
};
pub use scale::LinearScale;
pub use store::ItemStore;
pub use types::{Dimensions, Point, Viewport};
pub use year_scale::{Graduations, YearScale, graduation_years};
