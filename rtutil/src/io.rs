use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn to_json<T: Serialize>(obj: &T) -> String {
    // Our types don't have non-string map keys, so this can't fail
    serde_json::to_string_pretty(obj).unwrap()
}

pub fn write_json<T: Serialize>(path: &str, obj: &T) -> Result<()> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs_err::create_dir_all(parent)?;
        }
    }
    fs_err::write(path, to_json(obj))?;
    info!("Wrote {}", path);
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let contents = fs_err::read_to_string(path)?;
    let obj = serde_json::from_str(&contents).with_context(|| format!("parsing {}", path))?;
    Ok(obj)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_on_disk() {
        let path = std::env::temp_dir()
            .join(format!("rtutil_io_{}", std::process::id()))
            .join("numbers.json");
        let path = path.to_str().unwrap().to_string();

        write_json(&path, &vec![1, 2, 3]).unwrap();
        let back: Vec<usize> = read_json(&path).unwrap();
        assert_eq!(back, vec![1, 2, 3]);

        let err = read_json::<Vec<String>>(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing"));

        assert!(read_json::<Vec<usize>>("/definitely/not/here.json").is_err());
    }
}
