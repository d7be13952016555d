//! Cipher task coordination

use crate::cipher::{Transform, build_transform};
use crate::config::{Config, Mode};
use crate::operations::sink::Sink;
use crate::system::System;
use anyhow::Result;
use tracing::{debug, info};

/// Runs one transform over the configured data and delivers the result
#[non_exhaustive]
pub struct CipherTask<'src> {
    mode: Mode,
    data: String,
    transform: Box<dyn Transform>,
    sink: Sink,
    system: &'src dyn System,
}

impl<'src> CipherTask<'src> {
    /// Select the transform and sink for `config`
    #[must_use]
    #[inline]
    pub fn new(config: Config, system: &'src dyn System) -> Self {
        debug!(
            "Plan: mode={} alg={} key={} output={}",
            config.mode,
            config.algorithm,
            config.key,
            config
                .output_path
                .as_deref()
                .map_or_else(|| "stdout".to_owned(), |path| path.display().to_string())
        );

        let sink = Sink::for_output(config.output_path.as_deref());

        CipherTask {
            mode: config.mode,
            transform: build_transform(config.algorithm, config.key),
            data: config.data,
            sink,
            system,
        }
    }

    /// Transform the data and send it to the sink
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The codepoint transform produces an invalid character
    /// - The result cannot be written to the output file
    #[inline]
    pub fn execute(&self) -> Result<()> {
        let output = match self.mode {
            Mode::Encrypt => self.transform.encode(&self.data)?,
            Mode::Decrypt => self.transform.decode(&self.data)?,
        };

        self.sink.send(self.system, &output)?;

        if let Sink::File(ref path) = self.sink {
            info!("Wrote result to {}", path.display());
        }

        Ok(())
    }
}
