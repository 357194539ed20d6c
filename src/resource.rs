use url::Url;

use crate::DateKey;

/// Just a wrapper around the task endpoint URL and the user it acts for
#[derive(Clone, Debug)]
pub struct Resource {
    url: Url,
    user_id: String,
}

impl Resource {
    pub fn new(url: Url, user_id: String) -> Self {
        Self { url, user_id }
    }

    pub fn url(&self) -> &Url { &self.url }
    pub fn user_id(&self) -> &str { &self.user_id }

    /// Build the URL the tasks of `key` are read from, i.e. `{url}/{user_id}/{key}`
    pub fn tasks_url(&self, key: &DateKey) -> Url {
        let mut built = self.url.clone();
        match built.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().push(&self.user_id).push(key.as_str());
            },
            Err(_) => {
                // cannot-be-a-base URLs are rejected by `HttpTaskStore::new`, this is not supposed to happen
                log::warn!("{} cannot be used as a base URL", self.url);
            },
        }
        built
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_url() {
        let resource = Resource::new("https://todo.example.com/api/task".parse().unwrap(), "42".to_string());
        assert_eq!(resource.tasks_url(&DateKey::new(5, 3, 2024)).as_str(), "https://todo.example.com/api/task/42/5-3-2024");
        assert_eq!(resource.tasks_url(&DateKey::shared_defaults()).as_str(), "https://todo.example.com/api/task/42/shared_default_tasks");

        let trailing_slash = Resource::new("https://todo.example.com/api/task/".parse().unwrap(), "42".to_string());
        assert_eq!(trailing_slash.tasks_url(&DateKey::new(1, 0, 2025)).as_str(), "https://todo.example.com/api/task/42/1-0-2025");
    }
}
