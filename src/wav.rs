use std::{io, path::Path};

use hound::{WavReader, WavWriter};
use tracing::debug;

use crate::{
    error::{Error, Result},
    format::{AudioFormat, SampleWidth},
    sample::{PcmSample, RawSampleBuffer},
};

/// Reads the format and every sample of a PCM WAV file.
///
/// Samples come back as interleaved little-endian bytes of the container's
/// sample width; 8-bit samples are the stored unsigned bytes. The file is
/// closed when this returns, on success or failure.
pub fn read_wav(path: impl AsRef<Path>) -> Result<(AudioFormat, RawSampleBuffer)> {
    let path = path.as_ref();
    let mut reader = WavReader::open(path).map_err(|e| Error::input(path, e))?;
    let spec = reader.spec();
    if spec.channels == 0 {
        return Err(Error::input(path, hound::Error::FormatError("zero channels")));
    }

    let format = AudioFormat::from_wav_spec(spec, reader.duration())?;
    debug!(
        path = %path.display(),
        channels = format.channel_count,
        width = format.sample_width_bytes,
        frames = format.frame_count,
        sample_rate = format.sample_rate,
        "read wav header"
    );

    let width = format.sample_width_bytes as usize;
    let mut bytes = Vec::with_capacity(format.byte_len());
    for sample in reader.samples::<i32>() {
        let sample = sample.map_err(|e| Error::input(path, e))?;
        if width == 1 {
            bytes.push(stored_u8(sample));
        } else {
            bytes.extend_from_slice(&sample.to_le_bytes()[..width]);
        }
    }
    if bytes.len() != format.byte_len() {
        return Err(Error::input(
            path,
            hound::Error::IoError(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "sample data shorter than the header declares",
            )),
        ));
    }

    Ok((format, RawSampleBuffer::new(bytes)))
}

/// Creates or overwrites `path` with `format`'s header and the given samples.
///
/// A partially written file is left in place if writing fails.
pub fn write_wav(path: impl AsRef<Path>, format: &AudioFormat, raw: &RawSampleBuffer) -> Result<()> {
    let path = path.as_ref();
    let width = format.sample_width()?;
    if raw.len() != format.byte_len() {
        return Err(Error::shape(format!(
            "{} bytes of samples for a {}-byte payload",
            raw.len(),
            format.byte_len()
        )));
    }

    let mut writer = WavWriter::create(path, format.wav_spec()).map_err(|e| Error::output(path, e))?;
    let written = match width {
        SampleWidth::One => write_stored_u8(&mut writer, raw),
        SampleWidth::Two => write_samples::<i16, _>(&mut writer, raw),
        SampleWidth::Four => write_samples::<i32, _>(&mut writer, raw),
    };
    written.map_err(|e| Error::output(path, e))?;
    writer.finalize().map_err(|e| Error::output(path, e))?;

    debug!(path = %path.display(), bytes = raw.len(), "wrote wav");
    Ok(())
}

/// hound centres 8-bit samples around zero; undo that to get the byte on disk.
fn stored_u8(sample: i32) -> u8 {
    (sample + 128) as u8
}

fn write_stored_u8<W: io::Write + io::Seek>(writer: &mut WavWriter<W>, raw: &RawSampleBuffer) -> hound::Result<()> {
    for &byte in raw.as_bytes() {
        writer.write_sample((byte ^ 0x80) as i8)?;
    }
    Ok(())
}

fn write_samples<T, W>(writer: &mut WavWriter<W>, raw: &RawSampleBuffer) -> hound::Result<()>
where
    T: PcmSample,
    W: io::Write + io::Seek,
{
    for chunk in raw.as_bytes().chunks_exact(T::WIDTH) {
        writer.write_sample(T::from_le(chunk))?;
    }
    Ok(())
}
