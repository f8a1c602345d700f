/// Presentation rules injected once when the plugin is registered.
pub const BASE_STYLES: &str = r#"
.expressive-code pre {
  overflow: visible;
}

.special-token {
  background-color: unset;
  position: relative;
  display: inline-block;
  transition: background-color 0.3s ease-in-out;
}
.special-token:hover {
  background-color: hsl(302.43deg 31.19% 53.3% / 34%);
  border-radius: 3px;

  & .tooltip-container {
    background-color: #222!important;
    color: #aaa!important;
    display: block;
    visibility: visible;
    opacity: 1;
  }
}

.tooltip-container {
  display: none;
  visibility: hidden;
  position: absolute;
  z-index: 1;
  white-space: nowrap;
  padding: 0.75rem 1rem;
  box-shadow: 0 0 0.2rem #000;
  font-style: italic;
  border-radius: 0.2rem;
  opacity: 0;
  transition: opacity 0.3s ease-in-out 2s;

  & .tooltip-content {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;

    & p {
      margin: 0;
    }

    & .tooltip-header {
      font-size: 1rem;
      font-weight: bold;
    }
  }
}
"#;
