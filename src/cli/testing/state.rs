use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs`
/// must not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// The expected or actual objects deserialized from a repo directory. Unset
/// fields correspond to nonexistent files.
#[derive(Debug, PartialEq, Default)]
pub struct State {
    config: Option<base::Config>,
    dataset: Option<base::Table>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets repo's dataset.
    pub fn with_dataset<T>(mut self, dataset: T) -> Self
    where
        T: TryInto<base::Table> + std::fmt::Debug,
        <T as TryInto<base::Table>>::Error: std::fmt::Debug,
    {
        self.dataset = Some(dataset.try_into().unwrap());
        self
    }

    /// Deserializes objects from `fs`. The dataset is looked up where the
    /// config, or the default config, says it is.
    pub fn from_fs(fs: &base::Fs) -> Self {
        let config = fs
            .path::<base::Config>()
            .exists()
            .then(|| fs.read::<base::Config>().unwrap());
        let lookup = config.clone().unwrap_or_default();
        let dataset = fs
            .dataset_path(&lookup)
            .exists()
            .then(|| fs.read_table(&lookup).unwrap());
        Self { config, dataset }
    }
}

/// Representation of a repo directory's file contents. Unset fields correspond
/// to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    dataset: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets repo's dataset file contents.
    pub fn with_dataset(mut self, s: &'a str) -> Self {
        self.dataset = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if any field is not a
    /// valid serialization of a real type.
    pub fn to_fs(&self, fs: &base::Fs) {
        let mut config = base::Config::default();
        if let Some(s) = self.config {
            let obj = s.parse::<base::Config>();
            assert!(obj.is_ok(), "{:?}", obj);
            config = obj.unwrap();
            std::fs::write(fs.path::<base::Config>(), s).unwrap();
        }
        if let Some(s) = self.dataset {
            let obj = s.parse::<base::Table>();
            assert!(obj.is_ok(), "{:?}", obj);
            std::fs::write(fs.dataset_path(&config), s).unwrap();
        }
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.dataset {
            os = os.with_dataset(s);
        }
        os
    }
}
