use std::{fs::File, io::Read, path::Path};

use anyhow::Context;

pub fn get_file_contents(path: &Path) -> anyhow::Result<String> {
    let file_name = path.as_os_str().to_str().unwrap_or_default();
    let mut buff = String::new();

    let mut reader = File::open(path).context(format!("Failed to open file at '{}'", file_name))?;

    reader
        .read_to_string(&mut buff)
        .context(format!("Failed to read file at '{}'", file_name))?;

    Ok(buff)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_whole_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "width: 80")?;

        assert_eq!(get_file_contents(file.path())?, "width: 80\n");

        Ok(())
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = get_file_contents(Path::new("/no/such/file.yml")).unwrap_err();

        assert_eq!(error.to_string(), "Failed to open file at '/no/such/file.yml'");
    }
}
