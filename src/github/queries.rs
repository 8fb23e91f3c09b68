//! GraphQL documents sent to the GitHub v4 API.

pub fn repos_overview(owned_cursor: Option<&str>, contrib_cursor: Option<&str>) -> String {
    format!(
        r#"{{
  viewer {{
    name
    repositories(
        first: 100,
        orderBy: {{ field: UPDATED_AT, direction: DESC }},
        after: {owned}
    ) {{
      {page}
    }}
    repositoriesContributedTo(
        first: 100,
        includeUserRepositories: false,
        orderBy: {{ field: UPDATED_AT, direction: DESC }},
        contributionTypes: [COMMIT, PULL_REQUEST, REPOSITORY, PULL_REQUEST_REVIEW],
        after: {contrib}
    ) {{
      {page}
    }}
  }}
}}"#,
        owned = cursor(owned_cursor),
        contrib = cursor(contrib_cursor),
        page = REPO_PAGE,
    )
}

const REPO_PAGE: &str = r#"pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        nameWithOwner
        stargazers {
          totalCount
        }
        forkCount
        languages(first: 10, orderBy: { field: SIZE, direction: DESC }) {
          edges {
            size
            node {
              name
              color
            }
          }
        }
      }"#;

pub fn contrib_years() -> String {
    r#"query {
  viewer {
    contributionsCollection {
      contributionYears
    }
  }
}"#
    .to_string()
}

fn contribs_by_year(year: i32) -> String {
    format!(
        r#"    year{year}: contributionsCollection(
        from: "{year}-01-01T00:00:00Z",
        to: "{next}-01-01T00:00:00Z"
    ) {{
      contributionCalendar {{
        totalContributions
      }}
    }}"#,
        next = year + 1,
    )
}

/// One query aliasing a `contributionsCollection` per year.
pub fn all_contribs(years: &[i32]) -> String {
    let by_years = years
        .iter()
        .map(|y| contribs_by_year(*y))
        .collect::<Vec<_>>()
        .join("\n");
    format!("query {{\n  viewer {{\n{by_years}\n  }}\n}}")
}

fn cursor(c: Option<&str>) -> String {
    match c {
        Some(c) => format!("\"{c}\""),
        None => "null".to_string(),
    }
}
