#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::tests::toolkit::resource;
    use std::str::FromStr;

    #[test]
    fn cod23177() {
        let trp = TRP::from_file(resource("COD23177.TRP")).unwrap();
        assert!(trp.warnings.is_empty());

        let header = &trp.header;
        assert_eq!(
            header.title,
            " CODE'S 1-HOUR TROPOSPHERE ESTIMATES FOR DAY 177, 2023"
        );
        assert_eq!(
            header.calculation_time,
            Epoch::from_str("2023-06-26T07:52:00 GPST").unwrap()
        );
        assert_eq!(header.apriori_model, AprioriModel::GptDryGmfDry);
        assert!(header.apriori_model.is_dry_only());
        assert_eq!(header.mapping_function, MappingFunction::DryGmf);
        assert_eq!(header.gradient_model, GradientModel::ChenHerring);
        assert_eq!(header.elevation_cutoff, 3.0);
        assert_eq!(header.tabular_interval, 3600);
        assert_eq!(header.tabular_count, 86400);
        assert_eq!(header.timescale, TimeScale::GPST);
        assert!(header.table_header.starts_with(" STATION NAME"));

        assert_eq!(trp.records.len(), 9);
        assert_eq!(
            trp.stations().collect::<Vec<_>>(),
            vec!["ALGO 40104M001", "ZIMM 14001M004", "WTZR 14201M010"]
        );
        assert_eq!(trp.epochs().count(), 3);
        assert_eq!(
            trp.first_epoch(),
            Some(Epoch::from_str("2023-06-26T00:00:00 GPST").unwrap())
        );
        assert_eq!(
            trp.last_epoch(),
            Some(Epoch::from_str("2023-06-26T02:00:00 GPST").unwrap())
        );

        let algo = trp.station_records("ALGO 40104M001").collect::<Vec<_>>();
        assert_eq!(algo.len(), 3);

        let first = algo[0];
        assert_eq!(first.flag, 'A');
        assert_eq!(first.modeled_zenith_delay, 2.2543);
        assert_eq!(first.correction, Une::new(0.1012, -0.00021, 0.00034));
        assert_eq!(first.sigma, Une::new(0.0009, 0.00012, 0.00013));
        assert_eq!(first.total_zenith_delay, 2.3555);

        let wtzr = trp.station_records("WTZR 14201M010").last().unwrap();
        assert_eq!(wtzr.correction.east, 0.00062);
        assert_eq!(
            wtzr.epoch,
            Epoch::from_str("2023-06-26T02:00:00 GPST").unwrap()
        );

        assert_eq!(trp.station_records("UNKNOWN").count(), 0);
    }
    #[test]
    fn missing_sentinel() {
        let trp = TRP::from_file(resource("COD23177.TRP")).unwrap();
        let noeof = TRP::from_file(resource("COD23177_NOEOF.TRP")).unwrap();
        assert_eq!(noeof.header, trp.header);
        assert_eq!(noeof.records, trp.records);
        assert_eq!(noeof.warnings.len(), 1);
    }
    #[test]
    fn blank_lines() {
        let trp = TRP::from_file(resource("COD23177.TRP")).unwrap();
        let blank = TRP::from_file(resource("COD23177_BLANK.TRP")).unwrap();
        assert_eq!(blank.records, trp.records);
        assert!(blank.warnings.is_empty());
    }
    #[test]
    fn bad_apriori_model() {
        match TRP::from_file(resource("BAD_MODEL.TRP")) {
            Err(Error::Parsing {
                line,
                source: ParsingError::AprioriModel(code),
            }) => {
                assert_eq!(line, 3);
                assert_eq!(code.trim(), "-9");
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }
    #[test]
    fn truncated_header() {
        let content = std::fs::read_to_string(resource("COD23177.TRP")).unwrap();
        let truncated = content.lines().take(5).collect::<Vec<_>>().join("\n");
        assert!(matches!(
            TRP::from_str(&truncated),
            Err(Error::UnexpectedEof(5))
        ));
    }
    #[test]
    fn sentinel_only() {
        let content = std::fs::read_to_string(resource("COD23177.TRP")).unwrap();
        let header_only = content.lines().take(6).collect::<Vec<_>>().join("\n");
        let trp = TRP::from_str(&format!("{}\nEOF\n", header_only)).unwrap();
        assert!(trp.records.is_empty());
        assert!(trp.warnings.is_empty());
        assert_eq!(trp.first_epoch(), None);
    }
    #[test]
    fn stream_timescale() {
        let mut stream = Stream::open(resource("COD23177.TRP"), OpenMode::Read)
            .unwrap()
            .with_timescale(TimeScale::GST);
        assert!(!stream.is_writing_mode());

        let header = stream.read_header().unwrap();
        assert_eq!(header.timescale, TimeScale::GST);
        assert_eq!(header.calculation_time.time_scale, TimeScale::GST);
        assert_eq!(stream.line_number(), 6);

        let records = stream.records().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(records.len(), 9);
        for record in records.iter() {
            assert_eq!(record.epoch.time_scale, TimeScale::GST);
        }
        assert_eq!(
            stream.session().last_epoch(),
            Some(Epoch::from_str("2023-06-26T02:00:00 GST").unwrap())
        );
        // end of sequence is sticky
        assert!(stream.next_record().unwrap().is_none());
        assert!(stream.next_record().unwrap().is_none());
        assert!(stream.warnings().is_empty());
        assert!(!stream.is_failed());
    }
    #[test]
    fn stream_missing_sentinel() {
        let mut stream = Stream::open(resource("COD23177_NOEOF.TRP"), OpenMode::Read).unwrap();
        stream.read_header().unwrap();
        let mut count = 0;
        while let Some(_) = stream.next_record().unwrap() {
            count += 1;
        }
        assert_eq!(count, 9);
        assert!(stream.session().eof_reached());
        assert_eq!(stream.warnings().len(), 1);
        assert!(stream.next_record().unwrap().is_none());
        assert_eq!(stream.warnings().len(), 1);
    }
    #[test]
    fn stream_parsing_error() {
        let content = std::fs::read_to_string(resource("COD23177.TRP")).unwrap();
        let content = content.replacen("2023 06 26 01 00 00", "2023 06 26 01 00 6X", 1);
        let mut stream = Stream::from_reader(std::io::Cursor::new(content.into_bytes()));
        stream.read_header().unwrap();

        let results = stream.records().collect::<Vec<_>>();
        assert_eq!(results.len(), 4);
        assert!(results[..3].iter().all(|r| r.is_ok()));
        assert!(matches!(
            results[3],
            Err(Error::Parsing {
                line: 10,
                source: ParsingError::IntegerField {
                    field: "seconds",
                    ..
                },
            })
        ));
        assert!(stream.is_failed());
    }
    #[test]
    #[cfg(feature = "flate2")]
    fn gzip_resource() {
        let trp = TRP::from_file(resource("COD23177.TRP")).unwrap();
        let gz = TRP::from_file(resource("COD23177.TRP.gz")).unwrap();
        assert_eq!(gz, trp);
    }
    #[test]
    #[cfg(not(feature = "flate2"))]
    fn gzip_requires_feature() {
        assert!(matches!(
            TRP::from_file(resource("COD23177.TRP.gz")),
            Err(Error::Io(_))
        ));
    }
}
