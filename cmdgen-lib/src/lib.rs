use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub mod error;
pub mod persist;
pub mod registrar;
pub mod secrets;

pub use error::{RegisterError, Result};
pub use registrar::{Registrar, Submission};
pub use secrets::Secrets;

/// Loads the secrets, registers the command, and writes the platform's answer
/// next to the other command records.
///
/// The status code and response are echoed to `out` before they are judged, so
/// a rejected command still shows the operator why. Returns the record path.
pub async fn run(
    registrar: &Registrar,
    secrets_path: impl AsRef<Path>,
    command_file: impl AsRef<Path>,
    out: &mut impl Write,
) -> Result<PathBuf> {
    let secrets = Secrets::create_from_file(secrets_path)?;

    let submission = registrar.register(&secrets, command_file.as_ref()).await?;

    writeln!(out, "{}", submission.status.as_u16()).ok();
    match submission.json() {
        Ok(response) => writeln!(out, "{response}").ok(),
        Err(_) => writeln!(out, "{}", submission.text()).ok(),
    };

    if !submission.is_success() {
        return Err(RegisterError::Api {
            status: submission.status,
            body: submission.text().into_owned(),
        });
    }

    let response = submission.json()?;

    persist::write_record(&secrets.output_path, &response, &submission.body)
}
