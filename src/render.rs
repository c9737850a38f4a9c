mod options;
mod result;

pub use self::options::{RenderFormat, RenderOptions};
use self::result::RenderedResult;
use crate::{
    creation_output::CreationOutput, element::Element, error::Error, invalid_name::InvalidName,
};
use colored::Colorize;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

#[derive(Debug, Serialize)]
struct RenderedCreationOutput<'a> {
    name: &'a str,
    result: RenderedResult<&'a Element, &'a InvalidName>,
}

impl<'a> From<&'a CreationOutput> for RenderedCreationOutput<'a> {
    fn from(output: &'a CreationOutput) -> Self {
        Self {
            name: output.name(),
            result: output.result().as_ref().into(),
        }
    }
}

/// Renders a result of element creation.
pub async fn render_creation(
    output: &CreationOutput,
    options: &RenderOptions,
    writer: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    match options.format() {
        RenderFormat::Text => render_text(output, options, writer).await,
        RenderFormat::Json => {
            render_line(
                writer,
                &serde_json::to_string(&RenderedCreationOutput::from(output))?,
            )
            .await
        }
    }
}

async fn render_text(
    output: &CreationOutput,
    options: &RenderOptions,
    writer: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    let line = match output.result() {
        Ok(element) => {
            let mut line = format!("{}\t{}", "OK".green(), element.name());

            if options.verbose() {
                line.push_str(&format!(
                    "\t{}\t{}",
                    element.identity().to_string().yellow(),
                    element.owner()
                ));
            }

            if element.value() {
                line.push_str("\tvalue");
            }

            line
        }
        Err(error) => format!("{}\t{:?}\t{}", "ERROR".red(), output.name(), error.reason()),
    };

    render_line(writer, &line).await
}

async fn render_line(writer: &mut (impl AsyncWrite + Unpin), string: &str) -> Result<(), Error> {
    writer.write_all(string.as_bytes()).await?;
    writer.write_all(b"\n").await?;

    Ok(())
}
