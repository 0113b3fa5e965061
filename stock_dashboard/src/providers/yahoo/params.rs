use crate::models::request_params::LoadRequest;

/// Bar interval accepted by the chart endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub enum Interval {
    #[default]
    OneDay,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneDay => "1d",
        }
    }
}

/// Query string for a chart request.
///
/// `period1` is inclusive and `period2` exclusive, both as unix seconds, so
/// the end date is widened by one day to include its bar.
pub fn construct_params(request: &LoadRequest) -> Vec<(String, String)> {
    let (start, after_end) = request.utc_bounds();
    vec![
        ("period1".to_string(), start.timestamp().to_string()),
        ("period2".to_string(), after_end.timestamp().to_string()),
        ("interval".to_string(), Interval::default().as_str().to_string()),
        ("events".to_string(), "history".to_string()),
    ]
}
