use anyhow::Result;
use romkit::bytes::int::{read_sint, read_uint, write_sint, write_uint};

use super::command::{Cli, FieldArgs, ReadArgs, WriteArgs};
use crate::input::{read_input, write_output};

/// Formats a field value in decimal and as hex of the field width.
fn describe_value(value: i128, raw: u128, length: usize) -> String {
    format!("{value} (0x{raw:0width$X})", width = length * 2)
}

fn read_field(data: &[u8], field: &FieldArgs) -> Result<String> {
    let FieldArgs {
        offset,
        length,
        order,
        signed,
    } = *field;

    let raw = read_uint(data, offset, length, order.into());
    let text = if signed {
        let value = read_sint(data, offset, length, order.into())?;
        match raw {
            Ok(raw) => describe_value(value, raw, length),
            Err(_) => value.to_string(),
        }
    } else {
        let raw = raw?;
        match i128::try_from(raw) {
            Ok(value) => describe_value(value, raw, length),
            Err(_) => raw.to_string(),
        }
    };

    Ok(text)
}

pub fn cmd_read(args: &ReadArgs, _cli: &Cli) -> Result<()> {
    let data = read_input(&args.input)?;
    log::info!(
        "Reading {} byte field at {:#x} from {}",
        args.field.length,
        args.field.offset,
        args.input.display()
    );

    println!("{}", read_field(&data, &args.field)?);
    Ok(())
}

pub fn cmd_write(args: &WriteArgs, _cli: &Cli) -> Result<()> {
    let mut data = read_input(&args.input)?;
    let FieldArgs {
        offset,
        length,
        order,
        signed,
    } = args.field;

    if signed {
        write_sint(&mut data, args.value, offset, length, order.into())?;
    } else {
        write_uint(&mut data, args.value, offset, length, order.into())?;
    }
    log::info!(
        "Stored {} at {:#x} ({} bytes), now reads {}",
        args.value,
        offset,
        length,
        read_field(&data, &args.field)?
    );

    write_output(&args.output, &data)
}
