pub mod mapper;
pub mod primitives;
pub mod reading;
pub mod sorted_readings;
pub mod types;

pub use mapper::{date_index_to_pixel, date_to_local_offset, pixel_to_date, pixel_to_date_index};
pub use reading::{Reading, SensorMetadata};
pub use sorted_readings::SortedReadings;
pub use types::ChartPixelBounds;
