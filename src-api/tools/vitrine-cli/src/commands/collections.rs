use vitrine::{
    collections::{CollectionName, CollectionsManager},
    store::CollectionStore,
    user_success,
    utils::{
        fs::{self, Path},
        json,
        prelude::*,
    },
};

pub fn print_names() -> anyhow::Result<()> {
    let names: Vec<&str> = CollectionName::ALL.iter().map(|c| c.as_str()).collect();
    println!("{}", json::stringify_pretty(&names)?);
    Ok(())
}

pub async fn list(store: &CollectionStore, collection: &str) -> anyhow::Result<()> {
    let name: CollectionName = collection.parse()?;
    let records = CollectionsManager::new(store).list(name).await?;
    println!("{}", json::stringify_pretty(&records)?);
    Ok(())
}

pub async fn create(store: &CollectionStore, collection: &str, data: &str) -> anyhow::Result<()> {
    let name: CollectionName = collection.parse()?;
    let payload = parse_data(data).await?;
    let record = CollectionsManager::new(store).create(name, payload).await?;

    user_success!("{} (id {})", name.created_message(), record["id"]);
    println!("{}", json::stringify_pretty(&record)?);
    Ok(())
}

pub async fn delete(store: &CollectionStore, collection: &str, id: i64) -> anyhow::Result<()> {
    let name: CollectionName = collection.parse()?;
    CollectionsManager::new(store).delete(name, id).await?;
    user_success!("{} (id {})", name.deleted_message(), id);
    Ok(())
}

/// JSON en ligne, ou contenu d'un fichier si la valeur commence par `@`.
async fn parse_data(data: &str) -> VitrineResult<Value> {
    let Some(file) = data.strip_prefix('@') else {
        return json::parse(data);
    };
    match fs::read_to_string_opt(Path::new(file)).await? {
        Some(content) => json::parse(&content),
        None => Err(AppError::BadRequest(format!("Fichier introuvable : {}", file))),
    }
}
