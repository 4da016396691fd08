/// Asks whether a user is currently authenticated.
pub const LOGGED_USER_QUERY: &str = "{
  loggedUser {
    id
  }
}";

/// Exchanges credentials for an access token.
pub const LOGIN_MUTATION: &str = "mutation login($loginid: String!, $password: String!) {
  login(input: { loginid: $loginid, password: $password }) {
    user {
      accessToken {
        token
      }
    }
    result
  }
}";
