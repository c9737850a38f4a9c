use super::{ConfigError, SerializableConfig};
use log::debug;
use std::path::Path;
use tokio::fs::{canonicalize, read_to_string};

/// Reads a configuration file, following its `extend` chain.
pub async fn read_config(path: &Path) -> Result<SerializableConfig, ConfigError> {
    let mut paths = vec![];
    let mut previous_path = canonicalize(path).await?;
    let mut config = read_bare_config(path).await?;

    while let Some(path) = config.extend() {
        let path = canonicalize(
            previous_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(path),
        )
        .await?;

        if let Some(index) = paths.iter().position(|item| item == &path) {
            paths.push(path);
            return Err(ConfigError::CircularConfigFiles(paths[index..].to_vec()));
        }

        debug!("extending configuration from {}", path.display());

        paths.push(path.clone());
        let mut parent = read_bare_config(&path).await?;
        parent.merge(config);
        config = parent;
        previous_path = path;
    }

    Ok(config)
}

async fn read_bare_config(path: &Path) -> Result<SerializableConfig, ConfigError> {
    Ok(toml::from_str(&read_to_string(&path).await?)?)
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, read_config};
    use crate::{
        config::{UncheckedNamePolicy, compile_config},
        element_name::{ElementName, NameGrammar},
    };
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;
    use tokio::fs::{create_dir_all, write};

    #[tokio::test]
    async fn read_single_file() {
        let directory = tempdir().unwrap();
        let file = directory.path().join("domlet.toml");

        write(
            &file,
            indoc! {r#"
                grammar = "printable"
            "#},
        )
        .await
        .unwrap();

        let config = compile_config(read_config(&file).await.unwrap()).unwrap();

        assert_eq!(config.grammar(), NameGrammar::Printable);
    }

    #[tokio::test]
    async fn merge_configs() {
        let directory = tempdir().unwrap();
        let directory = directory.path();
        let base_file = directory.join("base.toml");
        let middle_file = directory.join("middle.toml");
        let child_file = directory.join("child.toml");

        write(
            &base_file,
            indoc! {r#"
                grammar = "html"
                max_name_length = 5
                [unchecked]
                policy = "substitute"
                fallback = "div"
            "#},
        )
        .await
        .unwrap();
        write(
            &middle_file,
            indoc! {r#"
                extend = "base.toml"
                max_name_length = 10
            "#},
        )
        .await
        .unwrap();
        write(
            &child_file,
            indoc! {r#"
                extend = "middle.toml"
                [unchecked]
                fallback = "span"
            "#},
        )
        .await
        .unwrap();

        let config = compile_config(read_config(&child_file).await.unwrap()).unwrap();

        assert_eq!(config.grammar(), NameGrammar::Html);
        assert_eq!(config.max_name_length(), Some(10));
        assert_eq!(
            config.unchecked_name_policy(),
            &UncheckedNamePolicy::Substitute(ElementName::parse("span").unwrap())
        );
    }

    #[tokio::test]
    async fn resolve_relative_files() {
        let directory = tempdir().unwrap();
        let directory = directory.path();
        let base_file = directory.join("base.toml");
        let sub_directory = directory.join("nested");
        let child_file = sub_directory.join("child.toml");

        create_dir_all(&sub_directory).await.unwrap();
        write(&base_file, "max_name_length = 5\n").await.unwrap();
        write(&child_file, "extend = \"../base.toml\"\n").await.unwrap();

        let config = compile_config(read_config(&child_file).await.unwrap()).unwrap();

        assert_eq!(config.max_name_length(), Some(5));
    }

    #[tokio::test]
    async fn detect_circular_extends() {
        let directory = tempdir().unwrap();
        let directory = directory.path();
        let first_file = directory.join("first.toml");
        let second_file = directory.join("second.toml");

        write(&first_file, "extend = \"second.toml\"\n").await.unwrap();
        write(&second_file, "extend = \"first.toml\"\n").await.unwrap();

        let result = read_config(&first_file).await;

        assert!(matches!(result, Err(ConfigError::CircularConfigFiles(_))));
    }

    #[tokio::test]
    async fn fail_on_missing_file() {
        let directory = tempdir().unwrap();

        let result = read_config(&directory.path().join("missing.toml")).await;

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
