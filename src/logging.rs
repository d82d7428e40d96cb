/// Logger setup. Level comes from `RUST_LOG`, defaulting to `warn`.
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::Result;
use env_logger::{Env, Target};

pub enum LogTarget {
    Stderr,
    /// Log file, truncated on every start; used while the terminal UI owns
    /// the screen.
    File(PathBuf),
}

pub fn init(target: LogTarget) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            builder.target(Target::Pipe(Box::new(file))).write_style(env_logger::WriteStyle::Never);
        }
    }
    builder.try_init()?;
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_log_file_starts_empty() {
        let path = std::env::temp_dir().join(format!("swatchr-log-{}.log", std::process::id()));
        std::fs::write(&path, "old run\n".repeat(100)).unwrap();

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "new run").unwrap();
        drop(file);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new run\n");
        std::fs::remove_file(&path).unwrap();
    }
}
