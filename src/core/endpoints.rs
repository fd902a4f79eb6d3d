/// URL builder for the three holiday endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn all(&self) -> String {
        format!("{}/holidays", self.base_url)
    }

    pub fn state(&self, state_code: &str) -> String {
        format!("{}/holidays/{}", self.base_url, state_code)
    }

    pub fn state_year(&self, state_code: &str, year: i32) -> String {
        format!("{}/holidays/{}/{}", self.base_url, state_code, year)
    }

    pub fn for_state(&self, state_code: &str, year: Option<i32>) -> String {
        match year {
            Some(year) => self.state_year(state_code, year),
            None => self.state(state_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let endpoints = Endpoints::new("https://ferien-api.de/api/v1");
        assert_eq!(endpoints.all(), "https://ferien-api.de/api/v1/holidays");
        assert_eq!(
            endpoints.for_state("HH", None),
            "https://ferien-api.de/api/v1/holidays/HH"
        );
        assert_eq!(
            endpoints.for_state("HH", Some(2019)),
            "https://ferien-api.de/api/v1/holidays/HH/2019"
        );
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let endpoints = Endpoints::new("http://localhost:3000/");
        assert_eq!(endpoints.base_url(), "http://localhost:3000");
        assert_eq!(endpoints.all(), "http://localhost:3000/holidays");
    }
}
