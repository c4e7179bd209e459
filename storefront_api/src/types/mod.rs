mod item;
pub use self::item::{Item, ProductCode};

mod page;
pub use self::page::PageResponse;

mod detail;
pub use self::detail::DetailItem;
