use std::fmt;

/// Views reachable from the employee list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Employees,
    AddEmployee,
    UpdateEmployee(i64),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Employees => "/employees".to_string(),
            Route::AddEmployee => "/add-employee".to_string(),
            Route::UpdateEmployee(id) => format!("/update-employee/{}", id),
        }
    }

    /// Parses a path produced by [`Route::path`]; `/` maps to the list
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/employees" => Some(Route::Employees),
            "/add-employee" => Some(Route::AddEmployee),
            _ => trimmed
                .strip_prefix("/update-employee/")
                .and_then(|id| id.parse().ok())
                .map(Route::UpdateEmployee),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_parse_back() {
        for route in [Route::Employees, Route::AddEmployee, Route::UpdateEmployee(12)] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Employees));
        assert_eq!(Route::parse("/update-employee/abc"), None);
        assert_eq!(Route::parse("/settings"), None);
    }
}
