use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;

use crate::{Error, Result, Location, common::checker};


/// Raw examples observed on `m` locations.
/// The `i`th example is an `m`-dimensional integer vector,
/// whose `j`th entry is the measurement at the `j`th location.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    input: Vec<Vec<i64>>,
    labels: Vec<u8>,
    locations: Vec<Location>,
}


impl DataSet {
    /// Construct a new data set.
    ///
    /// Returns `Err` if `input` is empty or not rectangular,
    /// `labels.len() != input.len()`,
    /// `locations.len()` differs from the row length,
    /// some location is missing,
    /// or some label is not `0` or `1`.
    pub fn new(
        input: Vec<Vec<i64>>,
        labels: Vec<u8>,
        locations: Vec<Location>,
    ) -> Result<Self>
    {
        let m = checker::rows(&input, "input")?;
        checker::length("labels", input.len(), labels.len())?;
        checker::length("locations", m, locations.len())?;
        checker::locations(&locations)?;
        checker::binary_labels(&labels)?;

        Ok(Self { input, labels, locations })
    }


    /// Read a data set file.
    /// See [`DataSet::from_reader`] for the format.
    pub(crate) fn from_file<P>(file: P) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }


    /// Read a data set from [`BufReader`].
    ///
    /// The format is whitespace-separated.
    /// Blank lines and text after `#` are ignored.
    /// ```txt
    /// n m
    /// x_0 y_0
    /// ...                     (m location lines)
    /// label v_0 v_1 ... v_{m-1}
    /// ...                     (n example lines)
    /// ```
    pub fn from_reader<R>(reader: BufReader<R>) -> Result<Self>
        where R: Read,
    {
        let mut lines = reader.lines()
            .enumerate()
            .map(|(i, line)| line.map(|l| (i + 1, l)))
            .filter(|line| match line {
                Ok((_, l)) => !strip_comment(l).trim().is_empty(),
                Err(_) => true,
            });

        let mut next_line = |what: &str| -> Result<(usize, Vec<String>)> {
            match lines.next() {
                Some(line) => {
                    let (no, line) = line?;
                    let tokens = strip_comment(&line)
                        .split_whitespace()
                        .map(str::to_string)
                        .collect();
                    Ok((no, tokens))
                },
                None => Err(Error::Parse {
                    line: 0,
                    message: format!("unexpected end of file. expected {what}"),
                }),
            }
        };

        let (no, header) = next_line("the header `n m`")?;
        let [n, m] = parse_exact::<usize, 2>(no, &header)?;

        let mut locations = Vec::with_capacity(m);
        for _ in 0..m {
            let (no, tokens) = next_line("a location")?;
            let [x, y] = parse_exact::<f64, 2>(no, &tokens)?;
            locations.push(Location::new(x, y));
        }

        let mut input = Vec::with_capacity(n);
        let mut labels = Vec::with_capacity(n);
        for _ in 0..n {
            let (no, tokens) = next_line("an example")?;
            if tokens.len() != m + 1 {
                return Err(Error::Parse {
                    line: no,
                    message: format!(
                        "expected a label and {m} values. got {} tokens",
                        tokens.len()
                    ),
                });
            }
            labels.push(parse_token::<u8>(no, &tokens[0])?);
            let row = tokens[1..].iter()
                .map(|t| parse_token::<i64>(no, t))
                .collect::<Result<Vec<_>>>()?;
            input.push(row);
        }

        Self::new(input, labels, locations)
    }


    /// Returns the pair `(n_sample, n_location)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.labels.len(), self.locations.len())
    }


    /// Returns the raw examples.
    #[inline]
    pub fn input(&self) -> &[Vec<i64>] {
        &self.input[..]
    }


    /// Returns the `i`th raw example.
    #[inline]
    pub fn row(&self, i: usize) -> &[i64] {
        &self.input[i][..]
    }


    /// Returns the labels.
    #[inline]
    pub fn labels(&self) -> &[u8] {
        &self.labels[..]
    }


    /// Returns the locations.
    #[inline]
    pub fn locations(&self) -> &[Location] {
        &self.locations[..]
    }
}


fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}


fn parse_token<T: FromStr>(line: usize, token: &str) -> Result<T> {
    token.parse::<T>()
        .map_err(|_| Error::Parse {
            line,
            message: format!("cannot parse `{token}`"),
        })
}


fn parse_exact<T, const N: usize>(line: usize, tokens: &[String])
    -> Result<[T; N]>
    where T: FromStr + Copy + Default,
{
    if tokens.len() != N {
        return Err(Error::Parse {
            line,
            message: format!("expected {N} values. got {}", tokens.len()),
        });
    }
    let mut values = [T::default(); N];
    for (v, t) in values.iter_mut().zip(tokens) {
        *v = parse_token(line, t)?;
    }
    Ok(values)
}
