pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, info, section, status_badge, success, summary_row};
pub use table::{parcel_table, stats_table, TableBuilder};
pub use theme::{theme, Theme};
