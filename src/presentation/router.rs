use crate::presentation::notifications::Notification;

pub const LOGIN_REQUIRED: &str = "Você precisa fazer login para acessar esta página";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Dashboard,
    MyExercises,
    CreateExercise,
    MyWorkouts,
    CreateWorkout,
    Library,
    Profile,
}

impl Page {
    pub const ALL: [Page; 9] = [
        Page::Home,
        Page::Login,
        Page::Dashboard,
        Page::MyExercises,
        Page::CreateExercise,
        Page::MyWorkouts,
        Page::CreateWorkout,
        Page::Library,
        Page::Profile,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Login => "login",
            Page::Dashboard => "dashboard",
            Page::MyExercises => "my-exercises",
            Page::CreateExercise => "create-exercise",
            Page::MyWorkouts => "my-workouts",
            Page::CreateWorkout => "create-workout",
            Page::Library => "library",
            Page::Profile => "profile",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.slug() == slug)
    }

    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "MyDumbbell",
            Page::Login => "Entrar",
            Page::Dashboard => "Painel",
            Page::MyExercises => "Meus Exercícios",
            Page::CreateExercise => "Criar Exercício",
            Page::MyWorkouts => "Meus Treinos",
            Page::CreateWorkout => "Criar Treino",
            Page::Library => "Biblioteca",
            Page::Profile => "Perfil",
        }
    }

    pub fn requires_auth(self) -> bool {
        !matches!(self, Page::Home | Page::Login)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Render(Page),
    Redirect {
        to: Page,
        notice: Option<Notification>,
    },
}

/// Decides what a request for `/<slug>` shows.
pub fn resolve(slug: &str, authenticated: bool) -> Route {
    match Page::from_slug(slug) {
        None => Route::Redirect {
            to: Page::Home,
            notice: None,
        },
        Some(page) if page.requires_auth() && !authenticated => Route::Redirect {
            to: Page::Login,
            notice: Some(Notification::error(LOGIN_REQUIRED)),
        },
        Some(page) => Route::Render(page),
    }
}

/// Where `/` leads.
pub fn landing(authenticated: bool) -> Page {
    if authenticated {
        Page::Dashboard
    } else {
        Page::Home
    }
}

/// The main navigation replaces the "Entrar" button once signed in, except
/// on the public pages.
pub fn shows_nav(page: Page, authenticated: bool) -> bool {
    authenticated && page.requires_auth()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
        assert_eq!(Page::from_slug("admin"), None);
    }

    #[test]
    fn test_protected_pages_redirect_anonymous_to_login() {
        for page in Page::ALL.into_iter().filter(|p| p.requires_auth()) {
            assert_eq!(
                resolve(page.slug(), false),
                Route::Redirect {
                    to: Page::Login,
                    notice: Some(Notification::error(LOGIN_REQUIRED)),
                }
            );
            assert_eq!(resolve(page.slug(), true), Route::Render(page));
        }
    }

    #[test]
    fn test_public_pages_always_render() {
        assert_eq!(resolve("home", false), Route::Render(Page::Home));
        assert_eq!(resolve("login", true), Route::Render(Page::Login));
    }

    #[test]
    fn test_unknown_page_goes_home() {
        assert_eq!(
            resolve("nowhere", true),
            Route::Redirect {
                to: Page::Home,
                notice: None
            }
        );
    }

    #[test]
    fn test_nav_visibility() {
        assert!(shows_nav(Page::Dashboard, true));
        assert!(!shows_nav(Page::Dashboard, false));
        assert!(!shows_nav(Page::Home, true));
        assert!(!shows_nav(Page::Login, true));
        assert_eq!(landing(true), Page::Dashboard);
        assert_eq!(landing(false), Page::Home);
    }
}
