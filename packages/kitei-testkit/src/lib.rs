mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::{Path, PathBuf},
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use kitei_domain::{Cell, Record, Table};

/// A file under the system temp directory, removed on drop.
pub struct TempFile {
	path: PathBuf,
	cleaned: bool,
}
impl TempFile {
	pub fn new(extension: &str, contents: &[u8]) -> Result<Self> {
		static COUNTER: AtomicU64 = AtomicU64::new(0);

		let nanos = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map_err(|err| Error::Message(format!("System time must be valid: {err}.")))?
			.as_nanos();
		let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
		let pid = std::process::id();
		let path = env::temp_dir().join(format!("kitei_test_{nanos}_{pid}_{ordinal}.{extension}"));

		fs::write(&path, contents)?;

		Ok(Self { path, cleaned: false })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn cleanup(mut self) -> Result<()> {
		self.cleanup_inner()
	}

	fn cleanup_inner(&mut self) -> Result<()> {
		if self.cleaned {
			return Ok(());
		}

		self.cleaned = true;

		fs::remove_file(&self.path)?;

		Ok(())
	}
}
impl Drop for TempFile {
	fn drop(&mut self) {
		if let Err(err) = self.cleanup_inner() {
			eprintln!("Failed to remove temp file {:?}: {err}.", self.path);
		}
	}
}

pub fn record(row: usize, category: &str, regulation: &str, title: &str, body: &str) -> Record {
	Record {
		row,
		category: Cell::text(category),
		regulation: Cell::text(regulation),
		clause_title: Cell::text(title),
		clause_number: Cell::number(row as f64 + 1.0),
		body: Cell::text(body),
	}
}

/// The two-row table used by the literal search examples.
pub fn two_row_table() -> Table {
	Table::new(vec![
		record(0, "火災", "普通保険約款", "A条", "保険金の支払"),
		record(1, "火災", "普通保険約款", "B条", "無関係"),
	])
}

/// A small clause corpus spanning three categories and three regulations.
pub fn sample_table() -> Table {
	Table::new(vec![
		record(
			0,
			"火災保険",
			"火災保険普通保険約款",
			"保険金を支払う場合",
			"当会社は、火災によって保険の対象について生じた損害に対して、この約款に従い、損害保険金を支払います。",
		),
		record(
			1,
			"火災保険",
			"火災保険普通保険約款",
			"保険金を支払わない場合",
			"当会社は、保険契約者の故意もしくは重大な過失によって生じた損害に対しては、保険金を支払いません。",
		),
		record(
			2,
			"自動車保険",
			"自動車保険普通保険約款",
			"対人賠償",
			"当会社は、被保険自動車の所有、使用または管理に起因して他人の生命または身体を害したときは、損害賠償責任を負担することによって被保険者が被る損害に対して、保険金を支払います。",
		),
		record(
			3,
			"自動車保険",
			"自動車保険特約",
			"弁護士費用特約",
			"当会社は、被保険者が弁護士へ委任した場合に要した費用（弁護士費用）に対して、保険金を支払います。",
		),
		record(
			4,
			"傷害保険",
			"傷害保険普通保険約款",
			"告知義務",
			"保険契約者または被保険者になる者は、保険契約締結の際、告知事項について、当会社に事実を正確に告げなければなりません。",
		),
		record(
			5,
			"火災保険",
			"火災保険普通保険約款",
			"保険期間",
			"保険期間は、保険証券記載の始期日の午後４時に始まり、末日の午後４時に終わります。",
		),
	])
}
