use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters of the user directory.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFilterParam {
    /// Case-insensitive substring of username, email or name
    pub search: Option<String>,
    /// `user`, `moderator`, `admin` or `all`
    pub role: Option<String>,
    /// `banned`, `active` or `all`
    pub status: Option<String>,
}

/// Query parameters of the pending listing queue.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilterParam {
    /// Category id or `all`
    pub category: Option<String>,
    /// Game server id or `all`
    pub server: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnalyticsParam {
    /// `day`, `week`, `month` or `year`; anything else means `week`
    pub range: Option<String>,
}
