/// Which of the two account forms a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    Register,
}

impl AuthForm {
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Register => "Create an account",
        }
    }

    pub fn asks_email(&self) -> bool {
        matches!(self, Self::Register)
    }

    pub fn password_autocomplete(&self) -> &'static str {
        match self {
            Self::Login => "current-password",
            Self::Register => "new-password",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Register => "Register",
        }
    }

    pub fn switch_prompt(&self) -> &'static str {
        match self {
            Self::Login => "No account yet?",
            Self::Register => "Already registered?",
        }
    }

    pub fn switch_href(&self) -> &'static str {
        match self {
            Self::Login => "/register",
            Self::Register => "/login",
        }
    }

    pub fn switch_label(&self) -> &'static str {
        match self {
            Self::Login => "Register",
            Self::Register => "Log in",
        }
    }
}
