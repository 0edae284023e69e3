use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;
use vitae::{Settings, Site};

const PERSONAL: &str = "\
`attribute`|`value`
Hobby|Zeilen
Naam|Jan de Vries
Woonplaats|Utrecht
";

const CONTACT: &str = "\
linkedin|linkedin.com/in/jandevries
email|jan@example.com
";

const ENGAGEMENT_2018: &str = "\
organisatie|Gemeente Utrecht
functie|Developer
werkzaamheden|Built the permit portal.
";

const ENGAGEMENT_2022: &str = "\
ORGANISATIE
Rabobank
FUNCTIE
Architect
WERKZAAMHEDEN
• Led migration
• Reduced latency
";

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap().and_hms_opt(9, 30, 5).unwrap()
}

fn write(root: &Path, path: &str, contents: &str) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "content/personal-data.txt", PERSONAL);
    write(root, "content/urls-contact.txt", CONTACT);
    write(root, "content/educations.txt", "2010 - 2014|Bachelor Informatica|Afstudeerrichting security\n");
    write(root, "content/certifications.txt", "2021|CKA|CNCF\n");
    write(root, "content/courses.txt", "2020|Kafka\n2019|Rust\n2020|Kubernetes\n");
    write(root, "content/engagements/opdracht_2018_2019.txt", ENGAGEMENT_2018);
    write(root, "content/engagements/opdracht_2022_heden.txt", ENGAGEMENT_2022);
    write(root, "content/engagements/notes.md", "organisatie|Ignored");
    write(root, "content/pictures/profile.png", "png");
    write(root, "specs/functional_dm.md", "`woonplaats` (Woonplaats)\n");
    dir
}

fn render(root: &Path) -> String {
    Site::discover(root, Settings::default()).unwrap().render(now()).unwrap()
}

#[test]
fn default_blocks() {
    let dir = site();
    let html = render(dir.path());

    let titles = ["PERSOONLIJK", "OPLEIDINGEN", "CERTIFICERINGEN", "CURSUSSEN", "OVERIGE CURSUSSEN", "WERKERVARING"];
    let positions: Vec<_> = titles.iter()
        .map(|t| html.find(&format!("<div class='block-title'>{t}</div>")).unwrap())
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(html.matches("<section class='block'>").count(), 6);
    assert_eq!(html.matches("<div class='block-sep'></div>").count(), 5);
    assert!(html.contains("<div class='generated'>15 October 2026 09:30:05</div>"));
    assert!(html.contains("href=\"static/style.css?v=20261015\""));
}

#[test]
fn content_is_rendered() {
    let dir = site();
    let html = render(dir.path());

    assert!(html.contains("<td class='label'>Naam</td>"));
    assert!(html.find("Jan de Vries").unwrap() < html.find("Zeilen").unwrap());
    assert!(!html.contains("`value`"));
    assert!(html.contains("class=\"profile-photo\""));
    assert!(html.contains("data:image/png;base64,cG5n"));

    assert!(html.contains("<div class='tekstblok'><p>Afstudeerrichting security</p></div>"));
    assert!(html.contains("<td>CKA — CNCF</td>"));
    assert!(html.contains("<div class='tekstblok'>Kafka, Kubernetes</div>"));

    assert!(html.contains("<ul><li>Led migration</li><li>Reduced latency</li></ul>"));
    assert!(html.contains("<span class=\"engagement-period\">2022 – heden</span>"));
    assert!(!html.contains("Ignored"));
}

#[test]
fn engagements_are_most_recent_first() {
    let dir = site();
    let html = render(dir.path());
    assert!(html.find("Rabobank").unwrap() < html.find("Gemeente Utrecht").unwrap());
}

#[test]
fn contact_is_only_in_the_sidebar() {
    let dir = site();
    write(dir.path(), "content/blocks.txt", "urls|Contact\nengagements|Werkervaring\n");
    let html = render(dir.path());

    let sidebar = html.find("<aside class=\"urls-sidebar\">").unwrap();
    let main = html.find("<div class='main-content'>").unwrap();
    assert!(sidebar < main);
    assert!(html.contains("href=\"https://linkedin.com/in/jandevries\""));
    assert!(html.contains("href=\"mailto:jan@example.com\""));
    assert!(!html.contains("<div class='block-title'>CONTACT</div>"));

    // Personal data exists, so a personal block is added in front.
    let personal = html.find("<div class='block-title'>PERSOONLIJK</div>").unwrap();
    let engagements = html.find("<div class='block-title'>WERKERVARING</div>").unwrap();
    assert!(personal < engagements);
    assert_eq!(html.matches("<div class='block-sep'></div>").count(), 1);
    assert!(!html[engagements..].contains("block-sep"));
}

#[test]
fn static_blocks() {
    let dir = site();
    write(dir.path(), "content/blocks.txt", "\
# name|title
personal|Persoonlijk
personal-text|Profiel
hobbies|Hobby's
missing|Leeg
");
    write(dir.path(), "content/blocks/personal-text.txt", "Ervaren architect.\n\n• Rust\n");
    write(dir.path(), "content/hobbies.txt", "Zeilen & schaken");

    let html = render(dir.path());
    assert!(html.contains(
        "<div class='block-title'>PROFIEL</div><div class='tekstblok'>\
         <p>Ervaren architect.</p><ul><li>Rust</li></ul></div>"
    ));
    assert!(html.contains(
        "<div class='block-title'>HOBBY&#x27;S</div><div class='tekstblok'><p>Zeilen &amp; schaken</p></div>"
    ));
    assert!(html.contains("<section class='block'><div class='block-title'>LEEG</div></section>"));
    assert!(html.trim_end().ends_with("</body></html>"));
}

#[test]
fn fixed_time_is_idempotent() {
    let dir = site();
    let site = Site::discover(dir.path(), Settings::default()).unwrap();
    let first = site.generate(now()).unwrap();
    let first_html = fs::read_to_string(&first).unwrap();

    let second = site.generate(now()).unwrap();
    assert_eq!(first, dir.path().join("cv.html"));
    assert_eq!(first_html, fs::read_to_string(second).unwrap());
}

#[test]
fn user_template_and_settings() {
    let dir = site();
    write(dir.path(), "templates/page.html", "<title>{{ title }}</title>{% for s in sections %}[{{ s.name }}]{% endfor %}");

    let settings = Settings {
        template: Some("templates/page.html".into()),
        title: "Jan & CV".into(),
        output: "public/index.html".into(),
        ..Settings::default()
    };

    let site = Site::discover(dir.path(), settings).unwrap();
    let output = site.generate(now()).unwrap();
    assert_eq!(output, dir.path().join("public/index.html"));
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "<title>Jan &amp; CV</title>[personal][education][certifications][courses][courses_short][engagements]"
    );
}

#[test]
fn nested_content_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "data/cv/content/personal-data.txt", PERSONAL);
    write(root, "data/cv/content/engagements/opdracht_2022_heden.txt", ENGAGEMENT_2022);
    write(root, "data/cv/content/pictures/profile.png", "png");

    let settings = Settings { content: "data/cv/content".into(), ..Settings::default() };
    let site = Site::discover(root, settings).unwrap();
    assert_eq!(site.load().unwrap().engagements.len(), 1);

    let html = site.render(now()).unwrap();
    assert!(html.contains("Rabobank"));
    assert!(html.contains("data:image/png;base64,cG5n"));
}

#[test]
fn required_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let error = Site::discover(dir.path(), Settings::default()).unwrap_err();
    assert_eq!(error.message(), "content directory does not exist");

    write(dir.path(), "content/courses.txt", "2020|Kafka");
    let error = Site::discover(dir.path(), Settings::default()).unwrap_err();
    assert_eq!(error.message(), "personal data file is missing");
    assert!(error.to_string().contains("personal-data.txt"));

    write(dir.path(), "content/personal-data/personal.txt", "Naam|Jan");
    let html = render(dir.path());
    assert!(html.contains("<p>Jan</p>"));
}
