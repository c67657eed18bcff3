//! README generated alongside the site files at delivery time.

use folio_model::{ContentRecord, Theme};
use folio_render::sections::SITE_NAME_FALLBACK;

use crate::bundle::{INDEX_HTML, README_MD, SCRIPT_JS, STYLES_CSS};

/// Render the README for a record and its resolved theme.
///
/// The color snippet lists the theme's hex values as they appear in the
/// generated stylesheet.
pub fn render_readme(record: &ContentRecord, theme: &Theme) -> String {
    let name = record
        .personal_info
        .full_name
        .as_deref()
        .unwrap_or(SITE_NAME_FALLBACK);

    format!(
        r#"# {name} - Professional Portfolio Website

## Features

- **Responsive Design**: Optimized for desktop, tablet, and mobile devices
- **Modern UI**: Clean and professional design with smooth animations
- **Performance Optimized**: Fast loading times and smooth scrolling
- **SEO Friendly**: Proper meta tags and semantic HTML structure
- **Cross-browser Compatible**: Works on all modern browsers

## Files Structure

- `{index}` - Main HTML file
- `{styles}` - CSS styles and animations
- `{script}` - JavaScript functionality
- `{readme}` - This documentation file

## Setup Instructions

1. Download all files to a local folder
2. Open `{index}` in any web browser
3. For local development, use a local server (e.g., Live Server in VS Code)

## Deployment

You can deploy this portfolio to any web hosting service:

### GitHub Pages
1. Create a new repository on GitHub
2. Upload all files to the repository
3. Go to Settings > Pages
4. Select "Deploy from a branch" and choose "main"

### Netlify
1. Drag and drop the folder to netlify.com/drop
2. Your site will be live instantly!

### Vercel
1. Install Vercel CLI: `npm i -g vercel`
2. Run `vercel` in the project folder
3. Follow the prompts

## Customization

### Colors
Theme: {theme_name} (`{theme_id}`)

Colors are written as hex values in every rule of `{styles}`. To change
the color scheme, replace each value below everywhere it appears in
`{styles}` (a find-and-replace per color is enough):

```css
:root {{
  --primary-color: {primary};
  --secondary-color: {secondary};
  --accent-color: {accent};
}}
```

### Content
- Update the content directly in `{index}`
- Replace images with your own
- Modify sections as needed

## Browser Support

- Chrome (latest)
- Firefox (latest)
- Safari (latest)
- Edge (latest)

## License

This portfolio template is free to use and modify for personal and commercial projects.

---

Generated by folio
"#,
        name = name,
        index = INDEX_HTML,
        styles = STYLES_CSS,
        script = SCRIPT_JS,
        readme = README_MD,
        theme_name = theme.name,
        theme_id = theme.id,
        primary = theme.colors.primary,
        secondary = theme.colors.secondary,
        accent = theme.colors.accent,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{PersonalInfo, ThemeRegistry};

    #[test]
    fn includes_theme_color_snippet() {
        let registry = ThemeRegistry::builtin();
        let readme = render_readme(&ContentRecord::default(), registry.resolve("elegant-purple"));

        assert!(readme.contains(":root {\n  --primary-color: #8B5CF6;"));
        assert!(readme.contains("--secondary-color: #7C3AED;"));
        assert!(readme.contains("--accent-color: #F59E0B;"));
    }

    #[test]
    fn color_guide_points_at_hex_values() {
        let readme = render_readme(
            &ContentRecord::default(),
            ThemeRegistry::builtin().default_theme(),
        );

        assert!(readme.contains("replace each value below everywhere it appears"));
        assert!(!readme.contains("Edit the CSS variables"));
    }

    #[test]
    fn titles_with_owner_name() {
        let record = ContentRecord {
            personal_info: PersonalInfo {
                full_name: Some("Ada Lovelace".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let readme = render_readme(&record, ThemeRegistry::builtin().default_theme());

        assert!(readme.starts_with("# Ada Lovelace - Professional Portfolio Website"));
        assert!(readme.contains("- `styles.css` - CSS styles and animations"));
    }

    #[test]
    fn falls_back_to_portfolio_title() {
        let readme = render_readme(
            &ContentRecord::default(),
            ThemeRegistry::builtin().default_theme(),
        );

        assert!(readme.starts_with("# Portfolio - Professional Portfolio Website"));
    }
}
