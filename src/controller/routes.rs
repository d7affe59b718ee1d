use regex::Regex;

/// List of all routes of the app
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Healthcheck,
    Categories,
    Products,
}

/// Matches request paths against anchored regexes, first match wins
pub struct RouteParser<R> {
    routes: Vec<(Regex, Box<dyn Fn() -> R + Send + Sync>)>,
}

impl<R> Default for RouteParser<R> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<R> RouteParser<R> {
    /// Adds a route without params. Panics on an invalid regex, routes are fixed at startup.
    pub fn add_route<F>(&mut self, regex_pattern: &str, f: F)
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        let regex = Regex::new(regex_pattern).unwrap_or_else(|e| panic!("Invalid route regex {}: {}", regex_pattern, e));
        self.routes.push((regex, Box::new(f)));
    }

    /// Returns the route matching the path, if any
    pub fn test(&self, path: &str) -> Option<R> {
        self.routes
            .iter()
            .find(|&&(ref regex, _)| regex.is_match(path))
            .map(|&(_, ref f)| f())
    }
}

pub fn create_route_parser() -> RouteParser<Route> {
    let mut router = RouteParser::default();

    // Healthcheck
    router.add_route(r"^/healthcheck$", || Route::Healthcheck);

    // Categories routes
    router.add_route(r"^/api/categorias/?$", || Route::Categories);

    // Products routes
    router.add_route(r"^/api/produtos/?$", || Route::Products);

    router
}
