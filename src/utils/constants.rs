/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3000 (por defecto)
/// - Producción: via BACKEND_URL env var (.env / CI)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Clave de localStorage para las credenciales de la sesión
pub const CREDENTIALS_STORAGE_KEY: &str = "story_feed_credentials";

/// Texto del placeholder cuando el usuario no tiene historias propias
pub const NO_OWN_STORIES_TEXT: &str = "No Stories to Show!";

/// Texto del placeholder cuando el usuario no tiene favoritos
pub const NO_FAVORITES_TEXT: &str = "No favorites!";
