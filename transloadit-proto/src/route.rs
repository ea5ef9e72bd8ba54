pub enum ApiRoute {
    Bored,
    Assemblies,
}

impl ApiRoute {
    fn path(&self) -> &'static str {
        match self {
            ApiRoute::Bored => "/instances/bored",
            ApiRoute::Assemblies => "/assemblies",
        }
    }

    pub fn target(&self, host: impl AsRef<str>) -> String {
        format!("http://{}{}", host.as_ref(), self.path())
    }
}
