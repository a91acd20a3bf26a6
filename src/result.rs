pub type Result<TValue> = anyhow::Result<TValue>;
