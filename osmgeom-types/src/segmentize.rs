//! Splitting of lines so that no segment is longer than a given length.
//!
//! Each line is handled on its own:
//!
//! * if none of its segments is longer than the maximum length, the line is copied to the output as is;
//! * otherwise every segment of the line becomes a separate two-point output line, and segments longer than the
//!   maximum are cut into pieces of exactly the maximum length plus a shorter remainder piece.
//!
//! Segments that are short enough are not joined back together once a line has been taken apart. Consumers depend
//! on this exact shape of the output, not only on the length bound.

use crate::error::GeomError;
use crate::geometry::Geom;
use crate::geometry_type::GeometryType;
use crate::linestring::LineString;
use crate::multi_linestring::MultiLineString;
use crate::segment::Segment;

/// Remainders of a split segment shorter than this fraction of the maximum length are treated as rounding noise.
const REMAINDER_TOLERANCE: f64 = 1e-9;

/// Splits a line string or a multi line string so that no segment is longer than `max_length`.
///
/// The result is always a [`Geom::MultiLineString`]. Fails with [`GeomError::InvalidArgument`] if `max_length` is
/// not a positive number or if a line has a segment of non-finite length, and with [`GeomError::TypeMismatch`] for
/// non-linear geometries. With infinite `max_length` every line is returned unchanged.
pub fn segmentize(geom: &Geom, max_length: f64) -> Result<Geom, GeomError> {
    check_max_length(max_length)?;

    let output = match geom {
        Geom::LineString(line) => split_lines(std::iter::once(line), max_length)?,
        Geom::MultiLineString(lines) => split_lines(lines.iter(), max_length)?,
        other => {
            return Err(GeomError::TypeMismatch {
                expected: GeometryType::LineString,
                actual: other.geometry_type(),
            })
        }
    };

    Ok(Geom::MultiLineString(output))
}

impl LineString {
    /// See [`segmentize`].
    pub fn segmentize(&self, max_length: f64) -> Result<MultiLineString, GeomError> {
        check_max_length(max_length)?;
        split_lines(std::iter::once(self), max_length)
    }
}

impl MultiLineString {
    /// See [`segmentize`].
    pub fn segmentize(&self, max_length: f64) -> Result<MultiLineString, GeomError> {
        check_max_length(max_length)?;
        split_lines(self.iter(), max_length)
    }
}

fn check_max_length(max_length: f64) -> Result<(), GeomError> {
    if max_length > 0.0 {
        Ok(())
    } else {
        Err(GeomError::InvalidArgument(format!(
            "maximum segment length must be a positive number, got {max_length}"
        )))
    }
}

fn split_lines<'a>(
    lines: impl Iterator<Item = &'a LineString>,
    max_length: f64,
) -> Result<MultiLineString, GeomError> {
    let mut output = MultiLineString::new();
    for line in lines {
        split_line(line, max_length, &mut output)?;
    }

    Ok(output)
}

fn split_line(
    line: &LineString,
    max_length: f64,
    output: &mut MultiLineString,
) -> Result<(), GeomError> {
    if let Some(segment) = line.segments().find(|s| !s.length().is_finite()) {
        return Err(GeomError::InvalidArgument(format!(
            "segment from {:?} to {:?} has non-finite length",
            segment.0, segment.1
        )));
    }

    if line.segments().all(|s| s.length() <= max_length) {
        output.push(line.clone());
        return Ok(());
    }

    let lines_before = output.num_geometries();
    for segment in line.segments() {
        let length = segment.length();
        if length <= max_length {
            output.push(LineString::from(vec![*segment.0, *segment.1]));
        } else {
            split_segment(&segment, length, max_length, output)?;
        }
    }

    log::trace!(
        "Line of {} points split into {} lines",
        line.len(),
        output.num_geometries() - lines_before
    );

    Ok(())
}

fn split_segment(
    segment: &Segment,
    length: f64,
    max_length: f64,
    output: &mut MultiLineString,
) -> Result<(), GeomError> {
    let pieces = (length / max_length).floor();
    if !pieces.is_finite() {
        return Err(GeomError::InvalidArgument(format!(
            "segment of length {length} cannot be split into pieces of {max_length}"
        )));
    }

    let pieces = pieces as usize;
    let remainder = length - pieces as f64 * max_length;
    let has_remainder = remainder > max_length * REMAINDER_TOLERANCE;

    let mut start = *segment.0;
    for i in 1..=pieces {
        let end = if i == pieces && !has_remainder {
            *segment.1
        } else {
            segment.interpolate(i as f64 * max_length / length)
        };
        output.push(LineString::from(vec![start, end]));
        start = end;
    }

    if has_remainder {
        output.push(LineString::from(vec![start, *segment.1]));
    }

    Ok(())
}
