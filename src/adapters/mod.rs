// Adapters layer: concrete implementations of the domain ports (calendar
// period source, CSV trajectory sink).

pub mod calendar;
pub mod csv_sink;

pub use calendar::CalendarPeriods;
pub use csv_sink::CsvSink;
