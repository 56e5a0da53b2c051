//! Loader of the text posting-list format.
//!
//! The first line holds the number of postings `N`, and each of the next `N`
//! lines holds `<id> <score>` separated by whitespace.
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::common::SENTINEL_ID;
use crate::errors::{PostmergeError, Result};
use crate::posting_list::{ListLayout, PostingList};

/// Upper bound on the postings preallocated from the header count.
const MAX_RESERVED_POSTINGS: usize = 1 << 20;

impl PostingList {
    /// Creates a posting list from a reader of the text format.
    ///
    /// # Arguments
    ///
    /// * `rdr` - A reader of the text format.
    /// * `layout` - Extra data to attach to the loaded postings.
    ///
    /// # Errors
    ///
    /// [`PostmergeError`] is returned when
    /// - the input is empty, or the posting count is not a number,
    /// - a posting line does not hold exactly two integers,
    /// - ids are not strictly increasing (or collide with the sentinel id),
    /// - there are fewer lines than the announced count,
    /// - `layout` asks for zero skip pointers.
    pub fn from_reader<R>(rdr: R, layout: ListLayout) -> Result<Self>
    where
        R: Read,
    {
        if layout == ListLayout::SkipPointers(0) {
            return Err(PostmergeError::invalid_argument(
                "layout",
                "the number of skip pointers must be positive",
            ));
        }

        let mut lines = BufReader::new(rdr).lines();

        let header = lines
            .next()
            .ok_or_else(|| PostmergeError::invalid_format("rdr", "input is empty"))??;
        let num_postings: usize = header.trim().parse().map_err(|e| {
            PostmergeError::invalid_format(
                "rdr",
                format!("line 1: invalid posting count {:?}: {}", header.trim(), e),
            )
        })?;

        // The count is untrusted; the lists grow past the cap as lines arrive.
        let mut list = PostingList::new();
        list.reserve(
            num_postings.min(MAX_RESERVED_POSTINGS) + usize::from(layout == ListLayout::Sentinel),
        );

        for i in 0..num_postings {
            let line_no = i + 2;
            let line = lines.next().ok_or_else(|| {
                PostmergeError::invalid_format(
                    "rdr",
                    format!("expected {} postings, found {}", num_postings, i),
                )
            })??;
            let (id, score) = parse_posting_line(&line, line_no)?;

            if id == SENTINEL_ID {
                return Err(PostmergeError::invalid_format(
                    "rdr",
                    format!("line {}: id {} is reserved for the sentinel", line_no, id),
                ));
            }
            if let Some(&last) = list.ids().last()
                && last >= id
            {
                return Err(PostmergeError::invalid_format(
                    "rdr",
                    format!(
                        "line {}: id {} does not follow previous id {}",
                        line_no, id, last
                    ),
                ));
            }
            list.add_posting(id, score);
        }

        let trailing = lines
            .filter(|line| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
            .count();
        if trailing != 0 {
            log::warn!(
                "ignored {} line(s) after the {} announced postings",
                trailing,
                num_postings
            );
        }

        match layout {
            ListLayout::Plain => {}
            ListLayout::Sentinel => list.add_sentinel(),
            ListLayout::SkipPointers(num_pointers) => list.build_skip_pointers(num_pointers)?,
        }

        log::debug!("loaded {} postings ({:?})", num_postings, layout);
        Ok(list)
    }

    /// Creates a posting list from a text file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or if its contents are
    /// invalid. See [`PostingList::from_reader`].
    pub fn from_path<P>(path: P, layout: ListLayout) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PostmergeError::invalid_argument(
                "path",
                format!("Failed to open posting list file {}: {}", path.display(), e),
            )
        })?;
        log::debug!("loading {}", path.display());
        Self::from_reader(file, layout)
    }

    /// Creates a posting list from a Zstandard-compressed text file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, is not a valid
    /// Zstandard stream, or if the decompressed contents are invalid.
    pub fn from_zstd<P>(path: P, layout: ListLayout) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PostmergeError::invalid_argument(
                "path",
                format!("Failed to open posting list file {}: {}", path.display(), e),
            )
        })?;
        log::debug!("loading {} (zstd)", path.display());
        let decoder = zstd::Decoder::new(file)?;
        Self::from_reader(decoder, layout)
    }
}

fn parse_posting_line(line: &str, line_no: usize) -> Result<(i64, i64)> {
    let mut fields = line.split_whitespace();
    let (Some(id), Some(score), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(PostmergeError::invalid_format(
            "rdr",
            format!("line {}: expected `<id> <score>`, got {:?}", line_no, line),
        ));
    };
    let parse = |field: &str, name: &str| {
        field.parse::<i64>().map_err(|e| {
            PostmergeError::invalid_format(
                "rdr",
                format!("line {}: invalid {} {:?}: {}", line_no, name, field, e),
            )
        })
    };
    Ok((parse(id, "id")?, parse(score, "score")?))
}
