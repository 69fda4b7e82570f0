pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::domain::model::OutputFormat;
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::{AddressBookError, Result};
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "find-contacts")]
    #[command(about = "Lists the contacts whose tags or names match any of the given keywords")]
    pub struct CliConfig {
        #[arg(long, default_value = "data/addressbook.toml")]
        pub data_file: String,

        #[arg(long, value_delimiter = ',', help = "Tag keywords, matched ignoring case")]
        pub tags: Vec<String>,

        #[arg(long, value_delimiter = ',', help = "Name keywords, matched ignoring case")]
        pub names: Vec<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        pub format: OutputFormat,

        #[arg(long, help = "Write the result to this file instead of stdout")]
        pub output: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn data_file(&self) -> &str {
            &self.data_file
        }

        fn tag_keywords(&self) -> &[String] {
            &self.tags
        }

        fn name_keywords(&self) -> &[String] {
            &self.names
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("data_file", &self.data_file)?;
            if let Some(output) = &self.output {
                validate_path("output", output)?;
            }
            if self.tags.is_empty() && self.names.is_empty() {
                return Err(AddressBookError::ConfigError {
                    message: "at least one of --tags or --names is required".to_string(),
                });
            }
            Ok(())
        }
    }

}
