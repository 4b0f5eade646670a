// Contrôle des fichiers uploadés (extension + nom sûr)

const ALLOWED_EXTENSIONS: &[&str] = &["db"];

/// Vérifie que le fichier a une extension autorisée (insensible à la casse)
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, extension)) => ALLOWED_EXTENSIONS.contains(&extension.to_lowercase().as_str()),
        None => false,
    }
}

/// Nettoie un nom de fichier fourni par le client :
/// - les séparateurs de chemin deviennent des espaces
/// - les blancs deviennent des "_"
/// - on ne garde que [A-Za-z0-9._-], sans "." ni "_" en bordure
///
/// Peut retourner une chaîne vide (ex: "../../")
pub fn secure_filename(filename: &str) -> String {
    let flattened = filename.replace(['/', '\\'], " ");

    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}
