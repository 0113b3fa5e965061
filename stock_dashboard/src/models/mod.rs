pub mod price_record;
pub mod price_series;
pub mod request_params;
pub mod ticker;
