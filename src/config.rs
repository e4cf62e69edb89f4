/// Settings applied to every transcript request served by one process.
#[derive(Clone, Debug)]
pub struct ReaderConfig {
    pub languages: Vec<String>,
    pub min_duration: f64,
    pub proxy: Option<String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
            min_duration: 90.0,
            proxy: None,
        }
    }
}

#[derive(Debug)]
pub struct ClientConfig {
    pub server_url: String,
    pub ytlinks: Vec<String>,
}

impl ClientConfig {
    pub fn new(server_url: String, ytlinks: Vec<String>) -> Self {
        Self { server_url, ytlinks }
    }
}
