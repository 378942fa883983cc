//! Localization for every user-visible string.
//!
//! UI code never hard-codes display text; it asks a [`Translate`]
//! implementation for the text of a key. The bundled [`I18n`] translator
//! carries Spanish and English catalogs. Unknown keys resolve to the key
//! itself so a missing entry is visible rather than blank.

use std::fmt;

use serde::Deserialize;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// All languages offered by the language switcher, in menu order.
    pub const ALL: [Language; 2] = [Language::Spanish, Language::English];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// Name of the language written in that language.
    pub fn endonym(self) -> &'static str {
        match self {
            Language::Spanish => "Español",
            Language::English => "English",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolves localization keys to display text.
pub trait Translate {
    fn translate<'a>(&self, key: &'a str) -> &'a str;

    fn language(&self) -> Language;
}

/// Catalog-backed translator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct I18n {
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            log::info!("Switching language from {} to {}", self.language, language);
        }
        self.language = language;
    }

    /// Whether the active catalog has an entry for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.catalog().iter().any(|(k, _)| *k == key)
    }

    fn catalog(&self) -> &'static [(&'static str, &'static str)] {
        match self.language {
            Language::Spanish => SPANISH,
            Language::English => ENGLISH,
        }
    }
}

impl Translate for I18n {
    fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.catalog()
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(key, |(_, text)| *text)
    }

    fn language(&self) -> Language {
        self.language
    }
}

const SPANISH: &[(&str, &str)] = &[
    // Column headers
    ("Name", "Nombre"),
    ("Age", "Edad"),
    ("Status", "Estado"),
    ("Rating", "Calificación"),
    ("Active", "Activo"),
    ("Inactive", "Inactivo"),
    ("ID", "ID"),
    ("USER_ID", "ID de usuario"),
    ("FIRST_NAME", "Primer nombre"),
    ("MIDDLE_NAME", "Segundo nombre"),
    ("FIRST_SURNAME", "Primer apellido"),
    ("SECOND_SURNAME", "Segundo apellido"),
    ("EMAIL", "Correo electrónico"),
    ("PHONE_NUMBER", "Teléfono"),
    ("BIRTHDATE", "Fecha de nacimiento"),
    ("USER_ROLES", "Roles"),
    ("ROLE_NAME", "Rol"),
    ("AMOUNT", "Monto"),
    ("START_DATE", "Fecha de inicio"),
    ("END_DATE", "Fecha de fin"),
    ("DATE", "Fecha"),
    ("CATEGORY", "Categoría"),
    ("SUBCATEGORY", "Subcategoría"),
    ("CLASSIFICATION", "Clasificación"),
    ("CLASSIFICATION_ID", "ID de clasificación"),
    ("CREATED_AT", "Creado"),
    ("UPDATED_AT", "Actualizado"),
    // Sentinels
    ("NOT_FOUND", "No encontrado"),
    ("N/A", "N/D"),
    ("INVALID_DATE", "Fecha inválida"),
    // Categories page
    ("CATEGORY_PAGE", "Categorías"),
    ("CREATE_CATEGORY", "Crear categoría"),
    ("CREATE_CATEGORY_CLICK", "Creación de categoría solicitada"),
    ("VIEWING_CATEGORY", "Viendo categoría"),
    ("EDITING_CATEGORY", "Editando categoría"),
    ("DELETING_CATEGORY", "Eliminando categoría"),
    ("ERROR_LOADING_DATA", "Error al cargar los datos"),
    // Shared widgets
    ("ACTIONS", "Acciones"),
    ("VIEW", "Ver"),
    ("EDIT", "Editar"),
    ("DELETE", "Eliminar"),
    ("CLOSE", "Cerrar"),
    ("LOADING", "Cargando..."),
    ("NO_RECORDS", "Sin registros"),
    ("SEARCH", "Buscar"),
    ("CHANGE_LANGUAGE", "Cambiar idioma"),
    ("APP_TITLE", "Tally"),
    // Fallback names for unnamed records
    ("BUDGET", "Presupuesto"),
    ("TRANSACTION", "Transacción"),
    ("USER_ROLE", "Rol de usuario"),
];

const ENGLISH: &[(&str, &str)] = &[
    ("Name", "Name"),
    ("Age", "Age"),
    ("Status", "Status"),
    ("Rating", "Rating"),
    ("Active", "Active"),
    ("Inactive", "Inactive"),
    ("ID", "ID"),
    ("USER_ID", "User ID"),
    ("FIRST_NAME", "First name"),
    ("MIDDLE_NAME", "Middle name"),
    ("FIRST_SURNAME", "First surname"),
    ("SECOND_SURNAME", "Second surname"),
    ("EMAIL", "Email"),
    ("PHONE_NUMBER", "Phone number"),
    ("BIRTHDATE", "Birthdate"),
    ("USER_ROLES", "Roles"),
    ("ROLE_NAME", "Role"),
    ("AMOUNT", "Amount"),
    ("START_DATE", "Start date"),
    ("END_DATE", "End date"),
    ("DATE", "Date"),
    ("CATEGORY", "Category"),
    ("SUBCATEGORY", "Subcategory"),
    ("CLASSIFICATION", "Classification"),
    ("CLASSIFICATION_ID", "Classification ID"),
    ("CREATED_AT", "Created"),
    ("UPDATED_AT", "Updated"),
    ("NOT_FOUND", "Not found"),
    ("N/A", "N/A"),
    ("INVALID_DATE", "Invalid date"),
    ("CATEGORY_PAGE", "Categories"),
    ("CREATE_CATEGORY", "Create category"),
    ("CREATE_CATEGORY_CLICK", "Category creation requested"),
    ("VIEWING_CATEGORY", "Viewing category"),
    ("EDITING_CATEGORY", "Editing category"),
    ("DELETING_CATEGORY", "Deleting category"),
    ("ERROR_LOADING_DATA", "Error loading data"),
    ("ACTIONS", "Actions"),
    ("VIEW", "View"),
    ("EDIT", "Edit"),
    ("DELETE", "Delete"),
    ("CLOSE", "Close"),
    ("LOADING", "Loading..."),
    ("NO_RECORDS", "No records"),
    ("SEARCH", "Search"),
    ("CHANGE_LANGUAGE", "Change language"),
    ("APP_TITLE", "Tally"),
    ("BUDGET", "Budget"),
    ("TRANSACTION", "Transaction"),
    ("USER_ROLE", "User role"),
];
