//! The movie database: a fixed list of records loaded once at startup.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub cast: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

static BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

impl Catalog {
    /// The database that ships with the binary.
    pub fn builtin() -> Self {
        let movies =
            serde_json::from_str(BUILTIN_CATALOG).expect("embedded catalog is valid JSON");
        Self { movies }
    }

    /// Loads a catalog from a JSON file (an array of movie records).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::ReadCatalog {
            path: path.to_path_buf(),
            source: e,
        })?;
        let movies = serde_json::from_str(&content).map_err(|e| Error::ParseCatalog {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self { movies })
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    fn find_by_title(&self, title: &str) -> Option<&Movie> {
        self.movies
            .iter()
            .find(|m| m.title.eq_ignore_ascii_case(title))
    }

    pub fn titles_by_year(&self, year: i32) -> Vec<String> {
        self.movies
            .iter()
            .filter(|m| m.year == year)
            .map(|m| m.title.clone())
            .collect()
    }

    /// Inclusive on both ends.
    pub fn titles_between_years(&self, start: i32, end: i32) -> Vec<String> {
        self.movies
            .iter()
            .filter(|m| start <= m.year && m.year <= end)
            .map(|m| m.title.clone())
            .collect()
    }

    pub fn titles_before_year(&self, year: i32) -> Vec<String> {
        self.movies
            .iter()
            .filter(|m| m.year < year)
            .map(|m| m.title.clone())
            .collect()
    }

    pub fn titles_after_year(&self, year: i32) -> Vec<String> {
        self.movies
            .iter()
            .filter(|m| m.year > year)
            .map(|m| m.title.clone())
            .collect()
    }

    pub fn director_by_title(&self, title: &str) -> Option<String> {
        self.find_by_title(title).map(|m| m.director.clone())
    }

    pub fn titles_by_director(&self, director: &str) -> Vec<String> {
        self.movies
            .iter()
            .filter(|m| m.director.eq_ignore_ascii_case(director))
            .map(|m| m.title.clone())
            .collect()
    }

    pub fn cast_by_title(&self, title: &str) -> Option<Vec<String>> {
        self.find_by_title(title).map(|m| m.cast.clone())
    }

    pub fn year_by_title(&self, title: &str) -> Option<i32> {
        self.find_by_title(title).map(|m| m.year)
    }

    pub fn titles_by_actor(&self, actor: &str) -> Vec<String> {
        self.movies
            .iter()
            .filter(|m| m.cast.iter().any(|a| a.eq_ignore_ascii_case(actor)))
            .map(|m| m.title.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_titles_by_year() {
        let catalog = Catalog::builtin();
        assert_eq!(
            sorted(catalog.titles_by_year(1974)),
            vec!["amarcord", "chinatown"]
        );
    }

    #[test]
    fn test_titles_by_year_no_hits() {
        let catalog = Catalog::builtin();
        assert!(catalog.titles_by_year(1900).is_empty());
    }

    #[test]
    fn test_titles_between_years() {
        let catalog = Catalog::builtin();
        assert_eq!(
            sorted(catalog.titles_between_years(1970, 1972)),
            vec!["johnny got his gun", "the godfather"]
        );
    }

    #[test]
    fn test_titles_before_year() {
        let catalog = Catalog::builtin();
        assert_eq!(
            sorted(catalog.titles_before_year(1950)),
            vec!["casablanca", "citizen kane", "gone with the wind", "metropolis"]
        );
    }

    #[test]
    fn test_titles_after_year() {
        let catalog = Catalog::builtin();
        assert_eq!(
            sorted(catalog.titles_after_year(1990)),
            vec![
                "boyz n the hood",
                "dead again",
                "flirting",
                "malcolm x",
                "the crying game",
            ]
        );
    }

    #[test]
    fn test_director_by_title() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.director_by_title("jaws"),
            Some("steven spielberg".to_string())
        );
        assert_eq!(catalog.director_by_title("slacker"), None);
    }

    #[test]
    fn test_title_lookup_is_case_insensitive() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.director_by_title("JAWS"),
            Some("steven spielberg".to_string())
        );
    }

    #[test]
    fn test_titles_by_director() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.titles_by_director("steven spielberg"),
            vec!["jaws"]
        );
    }

    #[test]
    fn test_cast_by_title() {
        let catalog = Catalog::builtin();
        let cast = catalog.cast_by_title("jaws").unwrap();
        assert!(cast.contains(&"roy scheider".to_string()));
        assert_eq!(catalog.cast_by_title("slacker"), None);
    }

    #[test]
    fn test_year_by_title() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.year_by_title("jaws"), Some(1975));
    }

    #[test]
    fn test_titles_by_actor() {
        let catalog = Catalog::builtin();
        assert_eq!(
            sorted(catalog.titles_by_actor("orson welles")),
            vec!["citizen kane", "othello"]
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "slacker", "director": "richard linklater", "year": 1990, "cast": []}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.movies().len(), 1);
        assert_eq!(
            catalog.director_by_title("slacker"),
            Some("richard linklater".to_string())
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/no/such/catalog.json")).unwrap_err();
        assert!(matches!(err, Error::ReadCatalog { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::ParseCatalog { .. }));
    }
}
