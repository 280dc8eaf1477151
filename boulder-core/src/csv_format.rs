//! Reading and writing the appointments CSV file.
//!
//! Each line holds three fields: date, title, participants. The participants
//! field is itself a CSV record of names, so plain names stay comma-joined
//! (`Alice,Bob`) while names containing commas or quotes get quoted inside
//! the field.

use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::appointment::Appointment;
use crate::date::{format_date, parse_date};
use crate::error::{BoulderError, BoulderResult};

const FIELD_COUNT: usize = 3;

/// Parse every record in file order.
///
/// Any malformed line fails the whole load.
pub fn read_appointments<R: Read>(reader: R) -> BoulderResult<Vec<Appointment>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut appointments = Vec::new();
    for result in reader.records() {
        let record = result?;
        appointments.push(parse_record(&record)?);
    }

    Ok(appointments)
}

/// Serialize every appointment as one line.
pub fn write_appointments<W: Write>(writer: W, appointments: &[Appointment]) -> BoulderResult<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for appt in appointments {
        let participants = encode_participants(&appt.participants)?;
        writer.write_record([format_date(appt.date).as_str(), appt.title.as_str(), participants.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

fn parse_record(record: &StringRecord) -> BoulderResult<Appointment> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    if record.len() != FIELD_COUNT {
        return Err(BoulderError::MalformedRecord {
            line,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, record.len()),
        });
    }

    let date = parse_date(&record[0]).map_err(|e| BoulderError::MalformedRecord {
        line,
        reason: e.to_string(),
    })?;
    let participants = decode_participants(&record[2], line)?;

    Ok(Appointment::new(date, &record[1], participants))
}

fn encode_participants(participants: &[String]) -> BoulderResult<String> {
    if participants.is_empty() {
        return Ok(String::new());
    }

    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut buf);
        writer.write_record(participants)?;
        writer.flush()?;
    }
    let encoded = String::from_utf8_lossy(&buf).into_owned();

    Ok(encoded.strip_suffix('\n').unwrap_or(encoded.as_str()).to_string())
}

fn decode_participants(field: &str, line: u64) -> BoulderResult<Vec<String>> {
    if field.is_empty() {
        return Ok(Vec::new());
    }

    // Quoted names always come out balanced; an odd quote count means a
    // legacy field that was only ever comma-joined.
    if field.matches('"').count() % 2 == 1 {
        return Ok(field.split(',').map(str::to_string).collect());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(field.as_bytes());

    let mut records = reader.records();
    let names = match records.next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => Vec::new(),
    };

    if records.next().is_some() {
        return Err(BoulderError::MalformedRecord {
            line,
            reason: "participants field spans several records".to_string(),
        });
    }

    Ok(names)
}
