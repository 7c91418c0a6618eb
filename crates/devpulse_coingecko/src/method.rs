use serde::Serialize;

pub trait Method {
    type Response: serde::de::DeserializeOwned;
    type Params: Serialize;

    /// Path relative to the API base url. Path segments (such as a coin id)
    /// come from the params, everything else is sent as the query string.
    fn path(params: &Self::Params) -> String;
}
