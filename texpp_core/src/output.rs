use derive_more::Deref;

/// Append-only buffer holding the woven document.
#[derive(Debug, Default, Deref)]
pub struct Output(String);

impl Output {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push_str(&mut self, text: &str) {
		self.0.push_str(text);
	}

	/// Hand back the complete document.
	pub fn finish(self) -> String {
		self.0
	}
}
