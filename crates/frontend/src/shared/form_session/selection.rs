use crate::shared::http::LocalFile;
use contracts::shared::limits::FileLimits;
use contracts::shared::validation::ValidationError;

/// Files that passed screening, plus the message for the ones that did not
#[derive(Debug, Clone, PartialEq)]
pub struct Screened<F> {
    pub accepted: Vec<F>,
    pub notice: Option<ValidationError>,
}

/// Drops oversized files, then truncates to the capacity left after
/// `occupied` slots. The count message wins over the size message.
pub fn screen_selection<F: LocalFile>(
    files: Vec<F>,
    occupied: usize,
    limits: &FileLimits,
) -> Screened<F> {
    let mut notice = None;
    let mut accepted = Vec::with_capacity(files.len());
    for file in files {
        if limits.allows_size(file.byte_size()) {
            accepted.push(file);
        } else if notice.is_none() {
            notice = Some(ValidationError::FileTooLarge {
                name: file.file_name(),
                limit: limits.size_label,
                unit: limits.unit_singular,
            });
        }
    }

    let capacity = limits.max_files.saturating_sub(occupied);
    if accepted.len() > capacity {
        accepted.truncate(capacity);
        notice = Some(ValidationError::TooManyFiles {
            max: limits.max_files,
            unit: limits.unit,
            scope: limits.scope,
        });
    }

    Screened { accepted, notice }
}

/// Strict variant: the whole batch must fit
pub fn check_selection<F: LocalFile>(files: &[F], limits: &FileLimits) -> Result<(), ValidationError> {
    if files.len() > limits.max_files {
        return Err(ValidationError::TooManyFiles {
            max: limits.max_files,
            unit: limits.unit,
            scope: limits.scope,
        });
    }
    match files.iter().find(|f| !limits.allows_size(f.byte_size())) {
        Some(file) => Err(ValidationError::FileTooLarge {
            name: file.file_name(),
            limit: limits.size_label,
            unit: limits.unit_singular,
        }),
        None => Ok(()),
    }
}
