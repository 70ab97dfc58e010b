use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::error::Result;

pub trait JSONReadWrite {
    fn read_json<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        Self: Sized;

    fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()>
    where
        Self: Serialize;
}

impl<I> JSONReadWrite for I
where
    I: DeserializeOwned,
{
    fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let result = serde_json::from_reader(reader)?;
        Ok(result)
    }

    fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()>
    where
        Self: Serialize,
    {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
