//! Publishing a new post.
//!
//! The one write path in the application: authenticate, validate the
//! draft, derive the post, hand it to the store. Nothing is persisted when
//! any step fails.

use std::{fs, io::Read, path::Path};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::{
    auth::{Authenticator, PermissiveAuth},
    cli::PublishArgs,
    config::AppConfig,
    data::{store::ContentStore, types::Draft},
    log,
};

/// `quill publish`.
pub fn publish(args: PublishArgs, config: &AppConfig, store: &ContentStore) -> Result<()> {
    let username = args
        .username
        .or_else(|| config.author.clone())
        .unwrap_or_default();
    let password = args.password.unwrap_or_default();

    let session = PermissiveAuth
        .login(&username, &password)
        .context("log in to publish: pass --username and --password (or set `author` in quill.toml)")?;

    let content = read_content(&args.file)?;
    let draft = Draft {
        title: args.title,
        content,
        cover_image: args.cover_image,
        tags: args.tags,
    };

    let post = draft.publish(&session.username, Utc::now())?;
    let id = post.id.clone();
    let title = post.title.clone();

    // The confirmation is driven by the store notification, the same way
    // any other listing would observe the append.
    store.subscribe(Box::new(|posts| {
        log!("store"; "library now holds {} authored post(s)", posts.len());
    }));
    store.add_post(post);

    log!("publish"; "published \"{title}\" as post #{id}");
    println!("Your blog post has been saved. Read it with `quill show {id}`.");
    Ok(())
}

/// Read the post body from a file, or from stdin when the path is `-`.
fn read_content(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read post body from stdin")?;
        return Ok(buf);
    }

    fs::read_to_string(path)
        .with_context(|| format!("failed to read post body from `{}`", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::persist::JsonStorage;

    fn args(title: &str, file: &Path) -> PublishArgs {
        PublishArgs {
            title: title.to_owned(),
            file: file.to_path_buf(),
            cover_image: None,
            tags: "Notes".to_owned(),
            username: Some("ann".to_owned()),
            password: Some("pw".to_owned()),
        }
    }

    fn store_in(dir: &Path) -> ContentStore {
        ContentStore::open(JsonStorage::new(dir))
    }

    #[test]
    fn test_publish_happy_path_appends_to_store() {
        let dir = tempfile::tempdir().unwrap();
        let body = dir.path().join("body.md");
        fs::write(&body, "## Hello\n\nworld").unwrap();

        let store = store_in(dir.path());
        publish(args("Hello", &body), &AppConfig::default(), &store).unwrap();

        assert_eq!(store.len(), 1);
        let posts = store.snapshot();
        assert_eq!(posts[0].title, "Hello");
        assert_eq!(posts[0].author, "ann");
        assert_eq!(posts[0].tags, vec!["Notes"]);
    }

    #[test]
    fn test_publish_without_credentials_fails_without_state_change() {
        let dir = tempfile::tempdir().unwrap();
        let body = dir.path().join("body.md");
        fs::write(&body, "world").unwrap();

        let mut a = args("Hello", &body);
        a.password = None;
        let store = store_in(dir.path());

        assert!(publish(a, &AppConfig::default(), &store).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_config_author_backs_missing_username() {
        let dir = tempfile::tempdir().unwrap();
        let body = dir.path().join("body.md");
        fs::write(&body, "world").unwrap();

        let mut a = args("Hello", &body);
        a.username = None;
        let config = AppConfig {
            author: Some("Config Author".to_owned()),
            ..AppConfig::default()
        };

        let store = store_in(dir.path());
        publish(a, &config, &store).unwrap();
        assert_eq!(store.snapshot()[0].author, "Config Author");
    }

    #[test]
    fn test_blank_title_aborts_publish() {
        let dir = tempfile::tempdir().unwrap();
        let body = dir.path().join("body.md");
        fs::write(&body, "world").unwrap();

        let store = store_in(dir.path());
        let err = publish(args("   ", &body), &AppConfig::default(), &store).unwrap_err();
        assert!(err.to_string().contains("missing title"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unreadable_body_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let missing = dir.path().join("nope.md");

        assert!(publish(args("Hello", &missing), &AppConfig::default(), &store).is_err());
        assert!(store.is_empty());
    }
}
