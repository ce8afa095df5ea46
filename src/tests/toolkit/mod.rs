use crate::prelude::*;
use rand::{distributions::Alphanumeric, Rng};
use std::{
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    sync::{Arc, Mutex},
};

/// Returns path to given test resource
pub fn resource(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_resources")
        .join("TRP")
        .join(name)
}

/*
 * Random file name, for temporary production
 */
pub fn random_name(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

/*
 * Header used in production tests
 */
pub fn test_header() -> Header {
    Header::default()
        .with_title(" TEST TROPOSPHERE ESTIMATES")
        .with_calculation_time(Epoch::from_str("2023-06-26T07:52:00 GPST").unwrap())
        .with_apriori_model(AprioriModel::GptDryGmfDry)
        .with_mapping_function(MappingFunction::WetGmf)
        .with_gradient_model(GradientModel::ChenHerring)
        .with_elevation_cutoff(3.0)
        .with_tabular(3600, 86400)
}

/*
 * Record used in production tests
 */
pub fn test_record(station: &str, epoch: &str) -> Record {
    Record::new(station, Epoch::from_str(epoch).unwrap())
        .with_flag('A')
        .with_modeled_zenith_delay(2.2543)
        .with_correction(Une::new(0.1012, -0.00021, 0.00034))
        .with_sigma(Une::new(0.0009, 0.00012, 0.00013))
        .with_total_zenith_delay(2.3555)
}

/// In memory [Write]able interface, that remains
/// readable once moved into a [Stream]
#[derive(Debug, Default, Clone)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn content(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
