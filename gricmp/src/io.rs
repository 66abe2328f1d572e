//! Structure and functions to read clustering solutions stored in csv files.
//!
//! Three layouts are recognized, none of them has a header :
//! - matrix : one record per cluster, one field per object giving the membership degree.
//! - labels : one record per object, the first field is the label of its cluster (exclusive hard clustering).
//! - sets : one record per object, each non empty field is the label of a cluster it belongs to.

use anyhow::anyhow;
use ndarray::Array2;

use std::fs::OpenOptions;
use std::io::{BufReader, Read};
use std::path::Path;

use gri::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CsvFormat {
    Matrix,
    Labels,
    Sets,
}

impl std::str::FromStr for CsvFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matrix" => Ok(CsvFormat::Matrix),
            "labels" => Ok(CsvFormat::Labels),
            "sets" => Ok(CsvFormat::Sets),
            _ => Err(anyhow!("format must be matrix, labels or sets, got {}", s)),
        }
    }
}

/// reads a membership matrix, record r gives degrees of all objects in cluster r.
pub fn read_matrix_csv(bufreader: &mut dyn Read) -> anyhow::Result<Array2<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(bufreader);
    //
    let mut values = Vec::<f64>::with_capacity(1000);
    let mut nb_fields: usize = 0;
    let mut num_record: usize = 0;
    for result in rdr.records() {
        num_record += 1;
        let record = result?;
        if num_record == 1 {
            nb_fields = record.len();
        } else if record.len() != nb_fields {
            return Err(anyhow!(
                "record {} has {} fields, expected {}",
                num_record,
                record.len(),
                nb_fields
            ));
        }
        for field in record.iter() {
            match field.trim().parse::<f64>() {
                Ok(val) => values.push(val),
                Err(_) => {
                    log::debug!("error decoding field {:?} of record {}", field, num_record);
                    return Err(anyhow!("error decoding field of record {}", num_record));
                }
            }
        }
    }
    if num_record == 0 {
        return Err(anyhow!("no record found"));
    }
    log::info!(
        "matrix loaded, nb clusters : {}, nb objects : {}",
        num_record,
        nb_fields
    );
    //
    Ok(Array2::from_shape_vec((num_record, nb_fields), values)?)
} // end of read_matrix_csv

/// reads one label per record, extra fields are ignored
pub fn read_labels_csv(bufreader: &mut dyn Read) -> anyhow::Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bufreader);
    //
    let mut labels = Vec::<String>::with_capacity(1000);
    for (num_record, result) in rdr.records().enumerate() {
        let record = result?;
        match record.get(0).map(|f| f.trim()) {
            Some(label) if !label.is_empty() => labels.push(label.to_string()),
            _ => return Err(anyhow!("record {} has no label", num_record + 1)),
        }
    }
    log::info!("nb labels loaded : {}", labels.len());
    Ok(labels)
} // end of read_labels_csv

/// reads the set of labels of each object, a record can have any number of fields
pub fn read_label_sets_csv(bufreader: &mut dyn Read) -> anyhow::Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bufreader);
    //
    let mut sets = Vec::<Vec<String>>::with_capacity(1000);
    for result in rdr.records() {
        let record = result?;
        let set = record
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(|f| f.to_string())
            .collect::<Vec<String>>();
        sets.push(set);
    }
    log::info!("nb label sets loaded : {}", sets.len());
    Ok(sets)
} // end of read_label_sets_csv

/// decodes a membership from any reader
pub fn read_membership(bufreader: &mut dyn Read, format: CsvFormat) -> anyhow::Result<Membership> {
    let membership = match format {
        CsvFormat::Matrix => {
            let degrees = read_matrix_csv(bufreader)?;
            Membership::new(&degrees.view())?
        }
        CsvFormat::Labels => Membership::from_labels(&read_labels_csv(bufreader)?),
        CsvFormat::Sets => {
            Membership::from_label_sets::<String, Vec<String>>(&read_label_sets_csv(bufreader)?)
        }
    };
    Ok(membership)
}

/// opens a file and decodes its membership
pub fn membership_from_file(path: &Path, format: CsvFormat) -> anyhow::Result<Membership> {
    log::info!("reading {:?} as {:?}", path, format);
    let file = OpenOptions::new().read(true).open(path).map_err(|e| {
        log::error!("could not open file {:?}", path);
        anyhow!("could not open file {:?} : {}", path, e)
    })?;
    let mut bufreader = BufReader::new(file);
    read_membership(&mut bufreader, format).map_err(|e| anyhow!("file {:?} : {}", path, e))
}

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use ndarray::array;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn matrix() {
        log_init_test();
        //
        let data = "1, 0.5, 0\n0, 0.5, 1\n";
        let m = read_matrix_csv(&mut data.as_bytes()).unwrap();
        assert_eq!(m, array![[1., 0.5, 0.], [0., 0.5, 1.]]);
        //
        let ragged = "1,0,0\n0,1\n";
        assert!(read_matrix_csv(&mut ragged.as_bytes()).is_err());
        let not_number = "1,0,x\n";
        assert!(read_matrix_csv(&mut not_number.as_bytes()).is_err());
        assert!(read_matrix_csv(&mut "".as_bytes()).is_err());
    }

    #[test]
    fn matrix_out_of_range() {
        let data = "1,2\n0,0\n";
        assert!(read_membership(&mut data.as_bytes(), CsvFormat::Matrix).is_err());
    }

    #[test]
    fn labels_and_sets() {
        log_init_test();
        //
        let labels = "a\nb\na\nc,ignored\n";
        let l = read_labels_csv(&mut labels.as_bytes()).unwrap();
        assert_eq!(l, vec!["a", "b", "a", "c"]);
        let m = read_membership(&mut labels.as_bytes(), CsvFormat::Labels).unwrap();
        assert_eq!(m.get_nb_clusters(), 3);
        assert_eq!(m.get_nb_objects(), 4);
        //
        let sets = "a\na,b\nb\n";
        let s = read_label_sets_csv(&mut sets.as_bytes()).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s[1], vec!["a", "b"]);
        let sets = "a\na,b\n ,\nb\n";
        let m = read_membership(&mut sets.as_bytes(), CsvFormat::Sets).unwrap();
        assert_eq!(m.get_nb_objects(), 4);
        assert_eq!(m.view().column(2).sum(), 0.);
    }

    #[test]
    fn compare_files_content() {
        log_init_test();
        //
        let u = read_membership(&mut "1,1,0,0\n0,0,1,1\n".as_bytes(), CsvFormat::Matrix).unwrap();
        let v = read_membership(&mut "x\ny\nx\ny\n".as_bytes(), CsvFormat::Labels).unwrap();
        let grand = GrandIndex::new(&u, &v).unwrap();
        assert!((grand.get_gri() - 1. / 3.).abs() < 1.0e-12);
        assert!((grand.get_agri() + 0.5).abs() < 1.0e-12);
    }

    #[test]
    fn format_names() {
        assert_eq!("sets".parse::<CsvFormat>().unwrap(), CsvFormat::Sets);
        assert!("json".parse::<CsvFormat>().is_err());
    }
} // end of mod tests
