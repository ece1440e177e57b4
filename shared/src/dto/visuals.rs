use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One rendered chart: the backend key and its base64-encoded PNG.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub payload: String,
}

impl Chart {
    /// `runs_histogram` is shown as `RUNS HISTOGRAM`.
    pub fn heading(&self) -> String {
        self.title.replace('_', " ").to_uppercase()
    }

    /// The payload is embedded as-is; it is never decoded client-side.
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.payload)
    }
}

/// Charts from `/visuals`, in the order the backend sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct TeamVisuals {
    charts: Vec<Chart>,
}

impl TeamVisuals {
    pub fn from_pairs<T, P, I>(pairs: I) -> Self
    where
        T: Into<String>,
        P: Into<String>,
        I: IntoIterator<Item = (T, P)>,
    {
        Self {
            charts: pairs
                .into_iter()
                .map(|(title, payload)| Chart {
                    title: title.into(),
                    payload: payload.into(),
                })
                .collect(),
        }
    }

    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

impl TryFrom<Map<String, Value>> for TeamVisuals {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let charts = map
            .into_iter()
            .map(|(title, value)| match value {
                Value::String(payload) => Ok(Chart { title, payload }),
                other => Err(format!(
                    "chart `{}` is not a base64 string (got {})",
                    title, other
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { charts })
    }
}

impl From<TeamVisuals> for Map<String, Value> {
    fn from(visuals: TeamVisuals) -> Self {
        visuals
            .charts
            .into_iter()
            .map(|chart| (chart.title, Value::String(chart.payload)))
            .collect()
    }
}
