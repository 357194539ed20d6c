use std::error::Error;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::traits::TaskStore;
use crate::resource::Resource;
use crate::{DateKey, Task};


/// Body of a `POST` request, that replaces the tasks of a key
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplaceTasksBody<'a> {
    user_id: &'a str,
    date: &'a str,
    tasks: &'a [Task],
}

/// Body of the reply to a `GET` request. Servers may omit the tasks altogether, or send `null`
#[derive(Debug, Default, Deserialize)]
struct TasksReply {
    #[serde(default)]
    tasks: Option<Vec<Task>>,
}

/// Extract the tasks from the body of a `GET` reply
fn parse_tasks_reply(body: &str) -> Result<Vec<Task>, serde_json::Error> {
    if body.trim().is_empty() || body.trim() == "null" {
        return Ok(Vec::new());
    }
    let reply: TasksReply = serde_json::from_str(body)?;
    Ok(reply.tasks.unwrap_or_default())
}


/// A task store that reads and writes its lists from a REST server
pub struct HttpTaskStore {
    resource: Resource,
    http: reqwest::Client,
}

impl HttpTaskStore {
    /// Create a store. This does not start a connection
    pub fn new<S: AsRef<str>, T: ToString>(url: S, user_id: T) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let url = Url::parse(url.as_ref())?;
        if url.cannot_be_a_base() {
            return Err(format!("{} cannot be used as a base URL", url).into());
        }

        Ok(Self {
            resource: Resource::new(url, user_id.to_string()),
            http: reqwest::Client::new(),
        })
    }

    /// Create a store from the current [`config`](crate::config) values
    pub fn from_config() -> Result<Self, Box<dyn Error + Send + Sync>> {
        let url = crate::config::current(&crate::config::API_URL);
        let user_id = crate::config::current(&crate::config::USER_ID);
        Self::new(url, user_id)
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    async fn read_tasks(&self, key: &DateKey) -> Result<Vec<Task>, Box<dyn Error + Send + Sync>> {
        let url = self.resource.tasks_url(key);
        log::debug!("Fetching tasks from {}", url);

        let response = self.http
            .get(url)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            log::debug!("No task stored for {}", key);
            return Ok(Vec::new());
        }
        if response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", response.status()).into());
        }

        let text = response.text().await?;
        let tasks = parse_tasks_reply(&text)?;
        log::debug!("Fetched {} tasks for {}", tasks.len(), key);
        Ok(tasks)
    }

    async fn replace_tasks(&self, key: &DateKey, tasks: &[Task]) -> Result<(), Box<dyn Error + Send + Sync>> {
        let body = ReplaceTasksBody {
            user_id: self.resource.user_id(),
            date: key.as_str(),
            tasks,
        };

        let response = self.http
            .post(self.resource.url().clone())
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", response.status()).into());
        }

        log::debug!("Stored {} tasks for {}", tasks.len(), key);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_body_layout() {
        let tasks = vec![Task::new("Read", false)];
        let body = ReplaceTasksBody {
            user_id: "2313841",
            date: "5-3-2024",
            tasks: &tasks,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "userId": "2313841",
                "date": "5-3-2024",
                "tasks": [{"text": "Read", "done": false}],
            })
        );
    }

    #[test]
    fn parse_replies() {
        let tasks = parse_tasks_reply(r#"{"tasks": [{"text": "Read", "done": true}], "date": "5-3-2024"}"#).unwrap();
        assert_eq!(tasks, vec![Task::new("Read", true)]);

        assert!(parse_tasks_reply(r#"{"tasks": []}"#).unwrap().is_empty());
        assert!(parse_tasks_reply(r#"{"tasks": null}"#).unwrap().is_empty());
        assert!(parse_tasks_reply(r#"{"message": "not found"}"#).unwrap().is_empty());
        assert!(parse_tasks_reply("").unwrap().is_empty());
        assert!(parse_tasks_reply("null").unwrap().is_empty());

        assert!(parse_tasks_reply("<html>").is_err());
        assert!(parse_tasks_reply(r#"{"tasks": [{"text": 3}]}"#).is_err());
    }

    #[test]
    fn rejects_invalid_urls() {
        assert!(HttpTaskStore::new("not a url", "1").is_err());
        assert!(HttpTaskStore::new("mailto:someone@example.com", "1").is_err());

        let store = HttpTaskStore::new("https://todo.example.com/api/task", "1").unwrap();
        assert_eq!(store.resource().user_id(), "1");
    }
}
